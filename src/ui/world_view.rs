//! Top-down view of the lake, scaled to fit the terminal.
//!
//! ```text
//!  . . . . . . . . . . . . . . . . . .
//!  . . . ~~~~~~~~~~~~~~~~~ . . . . . .
//!  . . . ~~~~~><~~~~~~~~~~ . . [$] . .
//!  . . . ~~~~~~~~~~~<~~~~~ . . . . . .
//!  . . . . . . . . @ . . . . . . . . .
//! ```

use lakeside::core::constants::{MAP_H, MAP_W};
use lakeside::core::GameState;
use lakeside::world::{day_fraction, evening_blend, WorldFish, LAKE, SHOP_BOARD};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GRASS: (u8, u8, u8) = (58, 110, 52);
const WATER: (u8, u8, u8) = (38, 96, 164);
const BOARD: (u8, u8, u8) = (111, 59, 26);
const EVENING: (u8, u8, u8) = (48, 30, 70);

/// Colours of the catalog species, in catalog order.
const FISH_COLORS: [Color; 8] = [
    Color::Gray,
    Color::White,
    Color::Yellow,
    Color::LightYellow,
    Color::Red,
    Color::LightMagenta,
    Color::Magenta,
    Color::LightGreen,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Grass,
    Water,
    Board,
}

/// World-space centre of a cell in a `width` x `height` grid.
fn cell_center(cx: u16, cy: u16, width: u16, height: u16) -> (f64, f64) {
    (
        (cx as f64 + 0.5) * MAP_W / width as f64,
        (cy as f64 + 0.5) * MAP_H / height as f64,
    )
}

/// Grid cell that contains a world point.
fn world_to_cell(x: f64, y: f64, width: u16, height: u16) -> (u16, u16) {
    let cx = (x / MAP_W * width as f64).floor() as i64;
    let cy = (y / MAP_H * height as f64).floor() as i64;
    (
        cx.clamp(0, width as i64 - 1) as u16,
        cy.clamp(0, height as i64 - 1) as u16,
    )
}

fn tile_at(x: f64, y: f64) -> Tile {
    let board = SHOP_BOARD;
    if x >= board.x && x <= board.right() && y >= board.y && y <= board.bottom() {
        Tile::Board
    } else if x >= LAKE.x && x <= LAKE.right() && y >= LAKE.y && y <= LAKE.bottom() {
        Tile::Water
    } else {
        Tile::Grass
    }
}

fn tint(base: (u8, u8, u8), blend: f64) -> Color {
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * blend * 0.6).round() as u8;
    Color::Rgb(
        mix(base.0, EVENING.0),
        mix(base.1, EVENING.1),
        mix(base.2, EVENING.2),
    )
}

fn fish_glyph(fish: &WorldFish) -> char {
    if fish.dir < 0.0 {
        '<'
    } else {
        '>'
    }
}

pub fn render_world(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Lakeside ")
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (w, h) = (inner.width, inner.height);
    if w == 0 || h == 0 {
        return;
    }

    let blend = evening_blend(day_fraction(state.elapsed_ms));
    let mut grid: Vec<Vec<(char, Style)>> = (0..h)
        .map(|cy| {
            (0..w)
                .map(|cx| {
                    let (x, y) = cell_center(cx, cy, w, h);
                    match tile_at(x, y) {
                        Tile::Grass => (
                            if (cx + cy) % 7 == 0 { ',' } else { ' ' },
                            Style::default().bg(tint(GRASS, blend)).fg(Color::Green),
                        ),
                        Tile::Water => (
                            if (cx + cy * 3) % 5 == 0 { '~' } else { ' ' },
                            Style::default().bg(tint(WATER, blend)).fg(Color::LightBlue),
                        ),
                        Tile::Board => (
                            '$',
                            Style::default()
                                .bg(tint(BOARD, blend))
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    }
                })
                .collect()
        })
        .collect();

    for fish in &state.world_fish {
        let (cx, cy) = world_to_cell(fish.x, fish.y, w, h);
        let cell = &mut grid[cy as usize][cx as usize];
        cell.0 = fish_glyph(fish);
        cell.1 = cell.1.fg(FISH_COLORS[fish.species % FISH_COLORS.len()]);
    }

    let (px, py) = world_to_cell(state.player.x, state.player.y, w, h);
    let player = &mut grid[py as usize][px as usize];
    player.0 = '@';
    player.1 = player
        .1
        .fg(if state.fishing.is_fishing() {
            Color::Cyan
        } else {
            Color::White
        })
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(c, style)| Span::styled(c.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_cell_clamps() {
        assert_eq!(world_to_cell(0.0, 0.0, 80, 20), (0, 0));
        assert_eq!(world_to_cell(MAP_W, MAP_H, 80, 20), (79, 19));
        assert_eq!(world_to_cell(1000.0, 800.0, 80, 20), (40, 10));
        assert_eq!(world_to_cell(-50.0, 9999.0, 80, 20), (0, 19));
    }

    #[test]
    fn test_tiles() {
        assert_eq!(tile_at(1000.0, 800.0), Tile::Water);
        assert_eq!(tile_at(100.0, 100.0), Tile::Grass);
        let (bx, by) = SHOP_BOARD.center();
        assert_eq!(tile_at(bx, by), Tile::Board);
    }

    #[test]
    fn test_cell_center_round_trips() {
        for (cx, cy) in [(0, 0), (10, 3), (79, 19)] {
            let (x, y) = cell_center(cx, cy, 80, 20);
            assert_eq!(world_to_cell(x, y, 80, 20), (cx, cy));
        }
    }

    #[test]
    fn test_tint_is_identity_in_daylight() {
        assert_eq!(tint(GRASS, 0.0), Color::Rgb(58, 110, 52));
        assert_ne!(tint(GRASS, 1.0), Color::Rgb(58, 110, 52));
    }
}

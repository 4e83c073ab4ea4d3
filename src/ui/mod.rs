mod fishing_bars;
mod hud;
pub mod shop_modal;
mod world_view;

use lakeside::core::GameState;
use lakeside::world::{is_near_lake, is_near_shop};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HUD_WIDTH: u16 = 26;

const SHOP_CONTROLS: &[(&str, &str)] = &[("[Space/E]", "Shop"), ("[Q]", "Save & quit")];
const SHORE_CONTROLS: &[(&str, &str)] = &[
    ("[Space]", "Cast"),
    ("[WASD]", "Walk"),
    ("[Q]", "Save & quit"),
];
const WALK_CONTROLS: &[(&str, &str)] = &[("[WASD/Arrows]", "Walk"), ("[Q]", "Save & quit")];

/// Presentation-only state owned by the main loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiFlags {
    /// A haptic pulse is being shown on the tension bar.
    pub haptic_flash: bool,
}

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, state: &GameState, flags: UiFlags) {
    let size = frame.size();

    let bottom_height = if state.fishing.is_fishing() { 5 } else { 2 };
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Notification line
            Constraint::Min(8),                // World + HUD
            Constraint::Length(bottom_height), // Fishing bars or controls
        ])
        .split(size);

    draw_notification(frame, v_chunks[0], state);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(HUD_WIDTH)])
        .split(v_chunks[1]);
    world_view::render_world(frame, h_chunks[0], state);
    hud::render_hud(frame, h_chunks[1], state);

    if state.fishing.is_fishing() {
        fishing_bars::render_fishing_bars(
            frame,
            v_chunks[2],
            &state.fishing.view(),
            state.fishing.outcome(),
            flags.haptic_flash,
        );
    } else {
        render_status_bar(frame, v_chunks[2], state);
    }

    if state.shop_open {
        shop_modal::render_shop_modal(frame, size, state);
    }
}

fn draw_notification(frame: &mut Frame, area: Rect, state: &GameState) {
    let style = if state.notifications.is_showing_notice() {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(state.notifications.text(), style))
            .alignment(Alignment::Center),
        area,
    );
}

/// Status line plus the key legend for the current context.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &GameState) {
    if area.height < 1 {
        return;
    }

    let (x, y) = (state.player.x, state.player.y);
    let (hint, controls) = if is_near_shop(x, y) {
        ("The shop board is right here", SHOP_CONTROLS)
    } else if is_near_lake(x, y) {
        ("The water looks calm", SHORE_CONTROLS)
    } else {
        ("", WALK_CONTROLS)
    };

    frame.render_widget(
        Paragraph::new(hint)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height >= 2 {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

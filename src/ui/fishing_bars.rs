//! Skill bar, catch progress and line tension for an active session.
//!
//! # Layout
//! ```text
//! +- Fishing (Worm) ---------------------------------+
//! | ░░░░░░░░░░░░░░░░░░░████┃███░░░░░░░░░░░░░░░░░░░░░ |
//! | Catch   [███████████░░░░░░░░░░░░░░░░░░░░]  34%   |
//! | Tension [███░░░░░░░░░░░░░░░░░░░░░░░░░░░░]  12    |
//! +--------------------------------------------------+
//! ```

use lakeside::core::constants::{HAPTIC_TENSION_THRESHOLD, TARGET_ZONE_HIGH, TARGET_ZONE_LOW};
use lakeside::fishing::{FishingOutcome, FishingPhase, FishingView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarCell {
    Outside,
    Zone,
    Cursor,
}

/// Maps a 0-100 position onto a cell index in `width` cells.
fn position_to_cell(pos: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    ((pos / 100.0 * width as f64).floor() as usize).min(width - 1)
}

fn skill_bar_cells(cursor: f64, width: usize) -> Vec<BarCell> {
    let zone_lo = position_to_cell(TARGET_ZONE_LOW, width);
    let zone_hi = position_to_cell(TARGET_ZONE_HIGH, width);
    let cursor_cell = position_to_cell(cursor, width);
    (0..width)
        .map(|i| {
            if i == cursor_cell {
                BarCell::Cursor
            } else if i > zone_lo && i <= zone_hi {
                BarCell::Zone
            } else {
                BarCell::Outside
            }
        })
        .collect()
}

fn outcome_text(outcome: &FishingOutcome) -> (String, Color) {
    match outcome {
        FishingOutcome::Caught {
            species, payout, ..
        } => (format!("{} landed! +${}", species.name, payout), Color::Green),
        FishingOutcome::Escaped { .. } => ("It got away".to_string(), Color::Gray),
        FishingOutcome::LineBroke { .. } => ("SNAP!".to_string(), Color::Red),
    }
}

/// Renders the minigame panel. `flash` inverts the tension bar for a haptic pulse.
pub fn render_fishing_bars(
    frame: &mut Frame,
    area: Rect,
    view: &FishingView,
    outcome: Option<&FishingOutcome>,
    flash: bool,
) {
    let title = match view.bait {
        Some(bait) => format!(" Fishing ({}) ", bait.name()),
        None => " Fishing ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // skill bar
            Constraint::Length(1), // progress
            Constraint::Length(1), // tension
        ])
        .split(inner);

    if view.phase == FishingPhase::Resolving {
        if let Some(outcome) = outcome {
            let (text, color) = outcome_text(outcome);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    text,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                rows[0],
            );
        }
        return;
    }

    let cursor_color = if view.in_zone {
        Color::Yellow
    } else {
        Color::White
    };
    let spans: Vec<Span> = skill_bar_cells(view.cursor, rows[0].width as usize)
        .into_iter()
        .map(|cell| match cell {
            BarCell::Outside => Span::styled("░", Style::default().fg(Color::DarkGray)),
            BarCell::Zone => Span::styled("█", Style::default().fg(Color::Green)),
            BarCell::Cursor => Span::styled(
                "┃",
                Style::default()
                    .fg(cursor_color)
                    .add_modifier(Modifier::BOLD),
            ),
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::Black))
        .ratio((view.progress_pct / 100.0).clamp(0.0, 1.0))
        .label(format!("Catch {:.0}%", view.progress_pct));
    frame.render_widget(progress, rows[1]);

    let tension_style = if view.tension >= HAPTIC_TENSION_THRESHOLD {
        if flash {
            Style::default().fg(Color::Black).bg(Color::Red)
        } else {
            Style::default().fg(Color::Red).bg(Color::Black)
        }
    } else {
        Style::default().fg(Color::LightRed).bg(Color::Black)
    };
    let label = if view.holding {
        format!("Tension {:.0}  (holding)", view.tension)
    } else {
        format!("Tension {:.0}", view.tension)
    };
    let tension = Gauge::default()
        .gauge_style(tension_style)
        .ratio((view.tension / 100.0).clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(tension, rows[2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_always_lands_on_a_cell() {
        assert_eq!(position_to_cell(0.0, 50), 0);
        assert_eq!(position_to_cell(100.0, 50), 49);
        assert_eq!(position_to_cell(50.0, 50), 25);
        assert_eq!(position_to_cell(50.0, 0), 0);
    }

    #[test]
    fn test_skill_bar_marks_zone_and_cursor() {
        let cells = skill_bar_cells(10.0, 100);
        assert_eq!(cells.len(), 100);
        assert_eq!(cells[10], BarCell::Cursor);
        assert_eq!(cells[50], BarCell::Zone);
        assert_eq!(cells[42], BarCell::Outside);
        assert_eq!(cells[58], BarCell::Zone);
        assert_eq!(cells[59], BarCell::Outside);
        assert_eq!(
            cells.iter().filter(|c| **c == BarCell::Cursor).count(),
            1
        );
    }
}

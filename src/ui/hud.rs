//! Side panel: wallet, gear, catch log and the clock.

use lakeside::core::GameState;
use lakeside::equipment::BaitKind;
use lakeside::fishing::FISH_CATALOG;
use lakeside::shop::rod_upgrade_cost;
use lakeside::world::{day_fraction, time_of_day, TimeOfDay};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE_BADGE: &str = "★ Lake Master ★";

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

pub fn render_hud(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Angler ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    if state.has_title() {
        lines.push(Line::from(Span::styled(
            TITLE_BADGE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        label("Money   "),
        Span::styled(
            format!("${}", state.money),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let rod = state.equipment.rod;
    let rod_text = match rod.next() {
        Some(_) => format!("Lv {} (next ${})", rod.get(), rod_upgrade_cost(rod)),
        None => format!("Lv {} (max)", rod.get()),
    };
    lines.push(Line::from(vec![label("Rod     "), Span::raw(rod_text)]));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        label("Bait    "),
        Span::raw(state.equipment.bait.total().to_string()),
    ]));
    let next_bait = state.equipment.bait.select();
    for kind in BaitKind::PRIORITY {
        let count = state.equipment.bait.count(kind);
        let style = if next_bait == Some(kind) {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else if count == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("  {:<8}{:>4}", kind.name(), count),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        label("Fish    "),
        Span::raw(state.fish.total().to_string()),
    ]));
    for species in FISH_CATALOG.iter() {
        let count = state.fish.count(species.key);
        if count > 0 {
            lines.push(Line::from(format!("  {:<14}{:>3}", species.name, count)));
        }
    }
    if state.trophies > 0 {
        lines.push(Line::from(vec![
            label("Trophies "),
            Span::raw(state.trophies.to_string()),
        ]));
    }

    lines.push(Line::from(""));
    let tod = time_of_day(day_fraction(state.elapsed_ms));
    let tod_color = match tod {
        TimeOfDay::Day => Color::LightYellow,
        TimeOfDay::Evening => Color::Magenta,
    };
    lines.push(Line::from(vec![
        label("Time    "),
        Span::styled(tod.label(), Style::default().fg(tod_color)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

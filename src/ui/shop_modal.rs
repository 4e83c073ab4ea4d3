//! Shop overlay.

use lakeside::core::GameState;
use lakeside::fishing::FISH_CATALOG;
use lakeside::shop::{rod_upgrade_cost, ShopItem};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Keys for [`ShopItem::ALL`], in order.
pub const ITEM_KEYS: [char; 4] = ['1', '2', '3', '4'];
pub const UPGRADE_KEY: char = '5';
pub const SELL_KEY: char = 's';

fn fish_value(state: &GameState) -> u64 {
    FISH_CATALOG
        .iter()
        .map(|s| s.base_price * state.fish.count(s.key) as u64)
        .sum()
}

fn entry(key: char, text: String, price: Option<u64>, money: u64) -> Line<'static> {
    let affordable = price.map_or(true, |p| p <= money);
    let price_text = match price {
        Some(p) => format!("${:>5}", p),
        None => "      ".to_string(),
    };
    Line::from(vec![
        Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{:<24}", text),
            if affordable {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
        Span::styled(price_text, Style::default().fg(Color::Yellow)),
    ])
}

pub fn render_shop_modal(frame: &mut Frame, area: Rect, state: &GameState) {
    let modal_width = 44u16.min(area.width.saturating_sub(4));
    let modal_height = 14u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Bait & Tackle ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let money = state.money;
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Money: "),
            Span::styled(
                format!("${}", money),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];

    for (item, key) in ShopItem::ALL.iter().zip(ITEM_KEYS) {
        lines.push(entry(key, item.label().to_string(), Some(item.price()), money));
    }

    let rod = state.equipment.rod;
    lines.push(match rod.next() {
        Some(next) => entry(
            UPGRADE_KEY,
            format!("Upgrade rod to Lv {}", next.get()),
            Some(rod_upgrade_cost(rod)),
            money,
        ),
        None => entry(UPGRADE_KEY, "Rod is at max level".to_string(), None, 0),
    });

    lines.push(entry(
        SELL_KEY,
        format!("Sell all fish ({})", state.fish.total()),
        None,
        money,
    ));
    lines.push(Line::from(Span::styled(
        format!("      worth ${}", fish_value(state)),
        Style::default().fg(Color::DarkGray),
    )));

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "[Esc] Close",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

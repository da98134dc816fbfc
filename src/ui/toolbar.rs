//! Toolbar UI
//!
//! Renders the search input, active category, and sort key in a single bar.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shoptui::SortKey;

pub fn render_toolbar(
    f: &mut Frame,
    area: Rect,
    search_input: &str,
    input_active: bool,
    category: &str,
    sort_by: SortKey,
) {
    let title = if input_active {
        " Products - typing search (Enter to apply, Esc to cancel) "
    } else {
        " Products "
    };

    let border_color = if input_active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let category_label = if category == "all" {
        "All Categories".to_string()
    } else {
        category.to_string()
    };

    let mut spans = vec![Span::raw("Search: "), Span::raw(search_input.to_string())];
    if input_active {
        spans.push(Span::styled("█", cursor_style));
    }
    spans.push(Span::styled(
        format!("  │  Category: {}  │  Sort: {}", category_label, sort_by.as_str()),
        Style::default().fg(Color::Gray),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    f.render_widget(paragraph, area);
}

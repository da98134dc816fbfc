//! Product list UI
//!
//! Renders the current catalog page, or the loading/error/empty state that
//! replaces it. Stale items stay on screen while a refresh is in flight;
//! only the title changes.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use shoptui::model::CatalogModel;
use shoptui::utils;

pub fn render_product_list(
    f: &mut Frame,
    area: Rect,
    catalog: &CatalogModel,
    selected: Option<usize>,
) {
    if let Some(error) = &catalog.error {
        render_error_state(f, area, &error.message);
        return;
    }

    if catalog.loading && catalog.items.is_empty() {
        render_message(f, area, "Loading products…", Color::Gray);
        return;
    }

    if catalog.items.is_empty() {
        let message = if catalog.has_filters() {
            "No products match your search or filters. Esc clears them."
        } else {
            "No products available."
        };
        render_message(f, area, message, Color::Gray);
        return;
    }

    let title = if catalog.loading {
        format!(
            " Showing {} of {} products (refreshing…) ",
            catalog.items.len(),
            catalog.total_items
        )
    } else {
        format!(
            " Showing {} of {} products ",
            catalog.items.len(),
            catalog.total_items
        )
    };

    let name_width = (area.width as usize / 2).max(12);
    let items: Vec<ListItem> = catalog
        .items
        .iter()
        .map(|product| {
            let stock = if product.in_stock {
                Span::styled("✓ In Stock", Style::default().fg(Color::Green))
            } else {
                Span::styled("✗ Out of Stock", Style::default().fg(Color::Red))
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!(
                    "{:<width$}",
                    utils::truncate_to_width(&product.name, name_width),
                    width = name_width
                )),
                Span::styled(
                    format!("₹{:>10}  ", product.display_price()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!("{:<12}  ", product.category),
                    Style::default().fg(Color::Cyan),
                ),
                stock,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_error_state(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Something went wrong",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw(message.to_string())),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Products "))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, area: Rect, message: &str, color: Color) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(color))),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Products "))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

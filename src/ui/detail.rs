//! Product detail UI
//!
//! Renders the detail card, or the loading / not-found / failure state.
//! "Product Not Found" is deliberately distinct from the generic failure
//! text; both are left via Esc rather than an in-place retry.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use shoptui::model::{DetailModel, DetailPhase};

pub fn render_detail(f: &mut Frame, area: Rect, detail: &DetailModel) {
    match &detail.phase {
        DetailPhase::Idle | DetailPhase::Loading => {
            render_centered(f, area, vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Loading product details…",
                    Style::default().fg(Color::Gray),
                )),
            ]);
        }

        DetailPhase::NotFound => {
            render_centered(f, area, vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Product Not Found",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from("The requested product could not be found."),
                Line::from(""),
                Line::from(Span::styled(
                    "Esc to go back to products",
                    Style::default().fg(Color::Gray),
                )),
            ]);
        }

        DetailPhase::Failed(error) => {
            render_centered(f, area, vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Failed to load product",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(error.message.clone()),
                Line::from(""),
                Line::from(Span::styled(
                    "Esc to go back to products",
                    Style::default().fg(Color::Gray),
                )),
            ]);
        }

        DetailPhase::Loaded(product) => {
            let stock = if product.in_stock {
                Span::styled(
                    "✓ In Stock",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    "✗ Out of Stock",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )
            };

            let availability = if product.in_stock {
                "Available for purchase"
            } else {
                "Currently unavailable"
            };

            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        product.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("   "),
                    stock,
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Price        ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        format!("₹{}", product.display_price()),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Category     ", Style::default().fg(Color::Gray)),
                    Span::raw(product.category.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Product ID   ", Style::default().fg(Color::Gray)),
                    Span::raw(product.id.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Availability ", Style::default().fg(Color::Gray)),
                    Span::raw(availability),
                ]),
            ];

            if let Some(description) = &product.description {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Description",
                    Style::default().fg(Color::Gray),
                )));
                lines.push(Line::from(description.clone()));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Esc to go back to products",
                Style::default().fg(Color::DarkGray),
            )));

            let paragraph = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL).title(" Product Details "))
                .wrap(Wrap { trim: false });
            f.render_widget(paragraph, area);
        }
    }
}

fn render_centered(f: &mut Frame, area: Rect, lines: Vec<Line>) {
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Product Details "))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

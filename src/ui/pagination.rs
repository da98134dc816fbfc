//! Pagination bar UI
//!
//! Renders the token sequence from `logic::pagination` with prev/next hints
//! disabled at the boundaries.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use shoptui::logic::pagination::{page_tokens, PageToken};

pub fn render_pagination(f: &mut Frame, area: Rect, page: u32, total_pages: u32) {
    let mut spans = Vec::new();

    let prev_style = if page == 1 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled("◀ Prev", prev_style));
    spans.push(Span::raw("   "));

    for token in page_tokens(page, total_pages) {
        match token {
            PageToken::Page(p) if p == page => {
                spans.push(Span::styled(
                    format!("[{}]", p),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            PageToken::Page(p) => {
                spans.push(Span::raw(format!(" {} ", p)));
            }
            PageToken::Ellipsis => {
                spans.push(Span::styled(" … ", Style::default().fg(Color::DarkGray)));
            }
        }
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw("  "));
    let next_style = if page == total_pages {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled("Next ▶", next_style));

    let paragraph = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(paragraph, area);
}

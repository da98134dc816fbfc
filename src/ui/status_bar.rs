use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use shoptui::model::{Model, View};

/// Render the bottom status bar: position info on the left, key hints on
/// the right-hand remainder of the line.
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let line = match model.ui.view {
        View::Catalog => {
            let position = if model.catalog.total_pages > 1 {
                format!(
                    "page {}/{} • {} products",
                    model.catalog.page, model.catalog.total_pages, model.catalog.total_items
                )
            } else {
                format!("{} products", model.catalog.total_items)
            };

            let hints = if model.ui.search_input_active {
                "type to search │ Enter apply │ Esc cancel"
            } else {
                "/ search │ c category │ s sort │ ←→ page │ ↑↓ select │ Enter details │ q quit"
            };

            Line::from(vec![
                Span::raw(format!(" {}  ", position)),
                Span::styled(hints, Style::default().fg(Color::DarkGray)),
            ])
        }
        View::Detail => Line::from(vec![Span::styled(
            " Esc back │ q quit",
            Style::default().fg(Color::DarkGray),
        )]),
    };

    f.render_widget(Paragraph::new(vec![line]), area);
}

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;
use shoptui::model::View;

use super::{detail, pagination, product_list, status_bar, toolbar};
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &App) {
    match app.model.ui.view {
        View::Catalog => render_catalog(f, app),
        View::Detail => {
            let areas = Layout::vertical([Constraint::Min(5), Constraint::Length(1)])
                .split(f.area());
            detail::render_detail(f, areas[0], &app.model.detail);
            status_bar::render_status_bar(f, areas[1], &app.model);
        }
    }
}

fn render_catalog(f: &mut Frame, app: &App) {
    let show_pagination = app.model.catalog.total_pages > 1;
    let pagination_height = if show_pagination { 3 } else { 0 };

    let areas = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(pagination_height),
        Constraint::Length(1),
    ])
    .split(f.area());

    toolbar::render_toolbar(
        f,
        areas[0],
        &app.model.ui.search_input,
        app.model.ui.search_input_active,
        &app.model.catalog.category,
        app.model.catalog.sort_by,
    );

    product_list::render_product_list(f, areas[1], &app.model.catalog, app.model.ui.selected);

    if show_pagination {
        pagination::render_pagination(
            f,
            areas[2],
            app.model.catalog.page,
            app.model.catalog.total_pages,
        );
    }

    status_bar::render_status_bar(f, areas[3], &app.model);
}

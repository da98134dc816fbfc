//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use shoptui::model::View;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    match app.model.ui.view {
        View::Detail => handle_detail_key(app, key),
        View::Catalog if app.model.ui.search_input_active => handle_search_key(app, key),
        View::Catalog => handle_catalog_key(app, key),
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            app.close_detail();
        }
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Cancel: drop the pending edit, restore the committed query
            app.model.ui.debouncer.cancel();
            app.model.ui.search_input = app.model.catalog.search_query.clone();
            app.model.ui.search_input_active = false;
        }
        KeyCode::Enter => {
            app.model.ui.search_input_active = false;
            if let Some(text) = app.model.ui.debouncer.flush() {
                if app.model.catalog.commit_search(text) {
                    app.request_catalog_fetch();
                }
            }
        }
        KeyCode::Backspace => {
            app.model.ui.search_input.pop();
            let text = app.model.ui.search_input.clone();
            app.model.ui.debouncer.input(text, Instant::now());
        }
        KeyCode::Char(c) => {
            app.model.ui.search_input.push(c);
            let text = app.model.ui.search_input.clone();
            app.model.ui.debouncer.input(text, Instant::now());
        }
        _ => {}
    }
}

fn handle_catalog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
        }

        KeyCode::Char('/') => {
            app.model.ui.search_input_active = true;
        }

        KeyCode::Char('c') => {
            let next = app.model.ui.next_category(&app.model.catalog.category);
            if app.model.catalog.set_category(next) {
                app.request_catalog_fetch();
            }
        }

        KeyCode::Char('s') => {
            // Client-side sort over the current page; no re-fetch
            let next = app.model.catalog.sort_by.next();
            app.model.catalog.set_sort(next);
        }

        KeyCode::Left | KeyCode::Char('h') => {
            if app.model.catalog.prev_page() {
                app.request_catalog_fetch();
            }
        }

        KeyCode::Right | KeyCode::Char('l') => {
            if app.model.catalog.next_page() {
                app.request_catalog_fetch();
            }
        }

        KeyCode::Up | KeyCode::Char('k') => {
            app.model.ui.select_prev(app.model.catalog.items.len());
        }

        KeyCode::Down | KeyCode::Char('j') => {
            app.model.ui.select_next(app.model.catalog.items.len());
        }

        KeyCode::Enter => {
            if let Some(product) = app.model.selected_product() {
                let id = product.id.clone();
                app.open_detail(id);
            }
        }

        KeyCode::Char('r') => {
            // Retry after failure re-issues an identical request
            if app.model.catalog.error.is_some() {
                app.request_catalog_fetch();
            }
        }

        KeyCode::Esc => {
            // Clear active filters and the search box
            if app.model.catalog.has_filters() {
                app.model.ui.search_input.clear();
                app.model.ui.debouncer.cancel();
                let search_cleared = app.model.catalog.commit_search(String::new());
                let category_cleared = app
                    .model
                    .catalog
                    .set_category(shoptui::logic::query::ALL_CATEGORIES.to_string());
                if search_cleared || category_cleared {
                    app.request_catalog_fetch();
                }
            }
        }

        _ => {}
    }
}

//! UI Model
//!
//! View routing, raw search input (pre-debounce), list selection, and the
//! category cycle order.

use crate::logic::debounce::Debouncer;
use crate::logic::query::ALL_CATEGORIES;

/// Which screen is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Catalog,
    Detail,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    pub view: View,

    /// Whether the search box is receiving keystrokes
    pub search_input_active: bool,

    /// Raw text in the search box; committed to the catalog query only
    /// after the debounce window
    pub search_input: String,

    pub debouncer: Debouncer,

    /// Cursor position within the current page's items
    pub selected: Option<usize>,

    /// Category cycle order, "all" first
    pub categories: Vec<String>,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new(categories: Vec<String>) -> Self {
        let mut cycle = vec![ALL_CATEGORIES.to_string()];
        cycle.extend(categories);
        Self {
            view: View::Catalog,
            search_input_active: false,
            search_input: String::new(),
            debouncer: Debouncer::new(),
            selected: None,
            categories: cycle,
            should_quit: false,
        }
    }

    /// Next category after `current` in the cycle, wrapping around
    pub fn next_category(&self, current: &str) -> String {
        let idx = self
            .categories
            .iter()
            .position(|c| c == current)
            .unwrap_or(0);
        let next = (idx + 1) % self.categories.len();
        self.categories[next].clone()
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx + 1 < len => idx + 1,
            Some(idx) => idx,
            None => 0,
        });
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) if idx > 0 => idx - 1,
            _ => 0,
        });
    }

    /// Keep the cursor in range after the item list changed
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) if idx >= len => Some(len - 1),
            (sel, _) => sel,
        };
    }
}

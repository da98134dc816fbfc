//! Pure Application Model
//!
//! Cloneable state with no I/O, organized into focused sub-models:
//!
//! - **CatalogModel**: list query state and fetch state machine
//! - **DetailModel**: single-product fetch state machine
//! - **UiModel**: view routing, search input, selection
//!
//! All network effects live in `services`; the models only record
//! transitions, so tests can drive them with fabricated responses.

pub mod catalog;
pub mod detail;
pub mod ui;

pub use catalog::CatalogModel;
pub use detail::{DetailModel, DetailPhase};
pub use ui::{UiModel, View};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// List query state and fetch state machine
    pub catalog: CatalogModel,

    /// Single-product fetch state machine
    pub detail: DetailModel,

    /// View routing, search input, selection
    pub ui: UiModel,
}

impl Model {
    pub fn new(page_size: u32, categories: Vec<String>) -> Self {
        Self {
            catalog: CatalogModel::new(page_size),
            detail: DetailModel::new(),
            ui: UiModel::new(categories),
        }
    }

    /// Product currently under the cursor in the list view
    pub fn selected_product(&self) -> Option<&crate::api::Product> {
        self.ui
            .selected
            .and_then(|idx| self.catalog.items.get(idx))
    }
}

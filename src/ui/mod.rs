// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: Main orchestration function that coordinates all rendering
// - toolbar: Renders the search/category/sort toolbar
// - product_list: Renders the catalog page (including loading/error/empty states)
// - pagination: Renders the ellipsis-compressed page bar
// - detail: Renders the product detail card
// - status_bar: Renders bottom status bar with counts and key hints

pub mod detail;
pub mod pagination;
pub mod product_list;
pub mod render;
pub mod status_bar;
pub mod toolbar;

// Re-export main render function for convenience
pub use render::render;

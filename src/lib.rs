//! Product Catalog TUI Library
//!
//! Exposes modules for testing

pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod services;
pub mod utils;

/// Sort key for the product list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    NameAsc,   // Name (A-Z)
    NameDesc,  // Name (Z-A)
    PriceAsc,  // Price (Low to High)
    PriceDesc, // Price (High to Low)
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::PriceAsc => "Price (Low to High)",
            SortKey::PriceDesc => "Price (High to Low)",
        }
    }

    /// Next key in the cycle order shown in the toolbar
    pub fn next(&self) -> SortKey {
        match self {
            SortKey::NameAsc => SortKey::NameDesc,
            SortKey::NameDesc => SortKey::PriceAsc,
            SortKey::PriceAsc => SortKey::PriceDesc,
            SortKey::PriceDesc => SortKey::NameAsc,
        }
    }
}

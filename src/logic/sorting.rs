//! Sorting comparison logic
//!
//! Pure functions for ordering products across the four sort keys. Sorting
//! only applies to the items of the currently fetched page, not the global
//! result set, because pagination is server-side.

use crate::api::Product;
use crate::SortKey;
use std::cmp::Ordering;

/// Compare two products according to the given sort key
///
/// Name comparison is case-insensitive. Equal keys compare `Equal` so the
/// stable sort preserves the original relative order of ties.
pub fn compare_products(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
        SortKey::PriceAsc => a.price.cmp(&b.price),
        SortKey::PriceDesc => b.price.cmp(&a.price),
    }
}

/// Return a new vector of the items ordered by `key`; input is untouched
pub fn sort_products(items: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare_products(a, b, key));
    sorted
}

//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - debounce: search-input debounce window with an injectable clock
//! - errors: HTTP status and transport error classification
//! - pagination: ellipsis-compressed page label generation
//! - query: canonical list query parameters
//! - sorting: client-side product ordering

pub mod debounce;
pub mod errors;
pub mod pagination;
pub mod query;
pub mod sorting;

//! Catalog fetch state machine
//!
//! Owns the query state (search, category, sort, page) and the fetch state
//! (items, totals, loading, error). Every fetch carries a monotonically
//! increasing sequence number; a response is applied only if it belongs to
//! the most recently issued request, so an out-of-order late reply can never
//! overwrite newer state.

use crate::api::{FetchError, ListResponse, Product};
use crate::logic::query::{ListQuery, ALL_CATEGORIES};
use crate::logic::sorting::sort_products;
use crate::SortKey;

#[derive(Clone, Debug)]
pub struct CatalogModel {
    // Query state
    pub search_query: String,
    pub category: String,
    pub sort_by: SortKey,
    pub page: u32,
    pub page_size: u32,

    // Fetch state. Stale items stay visible while a new fetch is loading to
    // avoid a layout flash; the error is always cleared on fetch entry.
    pub items: Vec<Product>,
    pub total_items: u64,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<FetchError>,

    latest_seq: u64,
}

impl CatalogModel {
    pub fn new(page_size: u32) -> Self {
        Self {
            search_query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort_by: SortKey::NameAsc,
            page: 1,
            page_size,
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            loading: false,
            error: None,
            latest_seq: 0,
        }
    }

    /// Snapshot of the parameters the next request is built from
    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            limit: self.page_size,
            search: self.search_query.clone(),
            category: self.category.clone(),
        }
    }

    /// Enter Loading: clears the previous error, keeps stale items visible,
    /// and returns the sequence number plus query for the request to issue.
    pub fn begin_fetch(&mut self) -> (u64, ListQuery) {
        self.latest_seq += 1;
        self.loading = true;
        self.error = None;
        (self.latest_seq, self.list_query())
    }

    /// Apply a list response. Returns false when the response was stale
    /// (a newer request has been issued since) and was discarded.
    pub fn apply_list_result(
        &mut self,
        seq: u64,
        result: Result<ListResponse<Product>, FetchError>,
    ) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        self.loading = false;
        match result {
            Ok(response) => {
                self.items = sort_products(&response.items, self.sort_by);
                self.total_items = response.total;
                self.total_pages = response.total.div_ceil(self.page_size as u64) as u32;
                self.error = None;
            }
            Err(err) => {
                // Items remain whatever they were, stale or empty
                self.error = Some(err);
            }
        }
        true
    }

    /// Commit a debounced search edit. Returns true when a re-fetch is
    /// needed; any filter change resets to page 1 so the new filter cannot
    /// request an out-of-range page.
    pub fn commit_search(&mut self, query: String) -> bool {
        if query == self.search_query {
            return false;
        }
        self.search_query = query;
        self.page = 1;
        true
    }

    /// Select a category ("all" clears the filter). Returns true when a
    /// re-fetch is needed.
    pub fn set_category(&mut self, category: String) -> bool {
        if category == self.category {
            return false;
        }
        self.category = category;
        self.page = 1;
        true
    }

    /// Change the sort key. Sorting is client-side over the current page's
    /// items, so this never triggers a re-fetch.
    pub fn set_sort(&mut self, key: SortKey) {
        if key == self.sort_by {
            return;
        }
        self.sort_by = key;
        self.items = sort_products(&self.items, key);
    }

    /// Jump to a page (server-side pagination, so this re-fetches).
    /// Out-of-range targets are ignored.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page < 1 || page == self.page || (self.total_pages > 0 && page > self.total_pages) {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        self.set_page(self.page - 1)
    }

    /// Whether any filter differs from its default
    pub fn has_filters(&self) -> bool {
        !self.search_query.is_empty() || self.category != ALL_CATEGORIES
    }
}

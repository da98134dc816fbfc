//! Product detail fetch state machine
//!
//! Single-resource analog of the catalog model. `NotFound` is a distinct
//! terminal state from `Failed`: the backend answered, the product just
//! does not exist, and recovery is navigating back rather than retrying.

use crate::api::{FetchError, Product};

#[derive(Clone, Debug, PartialEq)]
pub enum DetailPhase {
    Idle,
    Loading,
    Loaded(Product),
    NotFound,
    Failed(FetchError),
}

#[derive(Clone, Debug)]
pub struct DetailModel {
    /// Product id the current phase refers to
    pub id: String,
    pub phase: DetailPhase,

    // The counter lives for the whole session, not per navigation, so a
    // reply for a previously viewed product can never land in a newer view.
    latest_seq: u64,
}

impl DetailModel {
    pub fn new() -> Self {
        Self {
            id: String::new(),
            phase: DetailPhase::Idle,
            latest_seq: 0,
        }
    }

    /// Enter Loading for the given product
    pub fn begin_fetch(&mut self, id: String) -> (u64, String) {
        self.latest_seq += 1;
        self.id = id.clone();
        self.phase = DetailPhase::Loading;
        (self.latest_seq, id)
    }

    /// Apply a detail response; stale sequence numbers are discarded
    pub fn apply_result(&mut self, seq: u64, result: Result<Product, FetchError>) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        self.phase = match result {
            Ok(product) => DetailPhase::Loaded(product),
            Err(err) if err.is_not_found() => DetailPhase::NotFound,
            Err(err) => DetailPhase::Failed(err),
        };
        true
    }

    /// Navigate away; bumping the sequence invalidates any in-flight reply
    pub fn close(&mut self) {
        self.latest_seq += 1;
        self.id.clear();
        self.phase = DetailPhase::Idle;
    }
}

impl Default for DetailModel {
    fn default() -> Self {
        Self::new()
    }
}

//! API Response Handler
//!
//! Applies worker responses to the models. Stale replies (sequence number
//! no longer the latest) are discarded inside the models; the handler only
//! reacts when a response was actually applied.

use shoptui::services::ApiResponse;

use crate::{log_debug, App};

pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ListResult { seq, result } => {
            if app.model.catalog.apply_list_result(seq, result) {
                app.model.ui.clamp_selection(app.model.catalog.items.len());
            } else {
                log_debug(&format!("Discarded stale list response (seq {})", seq));
            }
        }

        ApiResponse::ProductResult { seq, id, result } => {
            if !app.model.detail.apply_result(seq, result) {
                log_debug(&format!(
                    "Discarded stale detail response for {} (seq {})",
                    id, seq
                ));
            }
        }
    }
}

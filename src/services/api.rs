//! Background fetch worker
//!
//! The UI loop never awaits the network directly. It sends `ApiRequest`s to
//! this worker and drains `ApiResponse`s each frame. Every request carries
//! the sequence number the issuing model handed out; the models use it to
//! discard stale replies, so overlapping requests are safe even though each
//! one runs as its own task and may resolve out of order.

use tokio::sync::mpsc;

use crate::api::{CatalogApi, FetchError, ListResponse, Product};
use crate::logic::query::ListQuery;

#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// Fetch one page of the catalog
    ListProducts { seq: u64, query: ListQuery },

    /// Fetch a single product by id
    GetProduct { seq: u64, id: String },
}

#[derive(Debug, Clone)]
pub enum ApiResponse {
    ListResult {
        seq: u64,
        result: Result<ListResponse<Product>, FetchError>,
    },

    ProductResult {
        seq: u64,
        id: String,
        result: Result<Product, FetchError>,
    },
}

async fn execute_request<C: CatalogApi>(client: &C, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::ListProducts { seq, query } => {
            let result = client.list_products(query).await;
            ApiResponse::ListResult { seq, result }
        }

        ApiRequest::GetProduct { seq, id } => {
            let result = client.get_product(id.clone()).await;
            ApiResponse::ProductResult { seq, id, result }
        }
    }
}

/// Spawn the fetch worker
///
/// Each request is executed in its own task so a slow list fetch cannot
/// block a detail fetch. Requests are fire-and-forget from the caller's
/// perspective; ordering is handled by the sequence numbers.
pub fn spawn_api_service<C: CatalogApi>(
    client: C,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                let response = execute_request(&client, request).await;
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::logic::errors;
use crate::logic::query::{build_list_params, ListQuery};

/// A single catalog entry as returned by the backend.
///
/// Products are immutable snapshots; the app only reorders collections of
/// them, never mutates one. `price` is in minor currency units (paise) so
/// no float rounding is involved anywhere.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Display value: price/100 formatted to two decimals
    pub fn display_price(&self) -> String {
        format!("{}.{:02}", self.price / 100, self.price % 100)
    }
}

/// Paginated list envelope: `total` counts matches across all pages,
/// independent of the page actually returned.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

/// Failure taxonomy surfaced to the UI.
///
/// `NotFound` is split out from the other HTTP errors because the detail
/// view renders it as its own terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Http(u16),
    Parse,
    NotFound,
}

/// Cloneable error so it can cross the response channel intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn network(err: reqwest::Error) -> Self {
        Self {
            kind: FetchErrorKind::Network,
            message: errors::transport_message(&err),
        }
    }

    pub fn parse(err: reqwest::Error) -> Self {
        Self {
            kind: FetchErrorKind::Parse,
            message: format!("Failed to parse response: {}", err),
        }
    }

    pub fn http(status: u16) -> Self {
        Self {
            kind: errors::classify_status(status),
            message: errors::status_message(status),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FetchErrorKind::NotFound
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

/// Network capability consumed by the fetch worker.
///
/// The production impl is [`CatalogClient`]; tests substitute a stub so the
/// orchestrator can be exercised without a backend.
pub trait CatalogApi: Clone + Send + Sync + 'static {
    fn list_products(
        &self,
        query: ListQuery,
    ) -> impl Future<Output = Result<ListResponse<Product>, FetchError>> + Send;

    fn get_product(
        &self,
        id: String,
    ) -> impl Future<Output = Result<Product, FetchError>> + Send;
}

#[derive(Clone)]
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn list_url(&self, query: &ListQuery) -> String {
        let mut url = format!("{}/products", self.base_url);
        for (i, (key, value)) in build_list_params(query).iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            url.push(sep);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }
}

impl CatalogApi for CatalogClient {
    async fn list_products(
        &self,
        query: ListQuery,
    ) -> Result<ListResponse<Product>, FetchError> {
        let url = self.list_url(&query);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http(status.as_u16()));
        }

        response.json().await.map_err(FetchError::parse)
    }

    async fn get_product(&self, id: String) -> Result<Product, FetchError> {
        let url = format!("{}/products/{}", self.base_url, urlencoding::encode(&id));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http(status.as_u16()));
        }

        response.json().await.map_err(FetchError::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::query::ListQuery;

    #[test]
    fn test_list_url_includes_only_set_filters() {
        let client = CatalogClient::new("http://localhost:4000".to_string());
        let query = ListQuery {
            page: 2,
            limit: 6,
            search: String::new(),
            category: "all".to_string(),
        };
        assert_eq!(
            client.list_url(&query),
            "http://localhost:4000/products?page=2&limit=6"
        );
    }

    #[test]
    fn test_list_url_encodes_values() {
        let client = CatalogClient::new("http://localhost:4000/".to_string());
        let query = ListQuery {
            page: 1,
            limit: 6,
            search: "usb cable".to_string(),
            category: "Electronics".to_string(),
        };
        assert_eq!(
            client.list_url(&query),
            "http://localhost:4000/products?page=1&limit=6&query=usb%20cable&category=Electronics"
        );
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": "p-1",
            "name": "Wireless Mouse",
            "price": 129900,
            "category": "Electronics",
            "inStock": true
        }"#;
        let product: Product = serde_json::from_str(json).expect("valid product");
        assert_eq!(product.id, "p-1");
        assert_eq!(product.price, 129900);
        assert!(product.in_stock);
        assert!(product.description.is_none());
    }

    #[test]
    fn test_display_price_two_decimals() {
        let product = Product {
            id: "p-1".to_string(),
            name: "Mug".to_string(),
            price: 129900,
            category: "Home".to_string(),
            in_stock: true,
            description: None,
        };
        assert_eq!(product.display_price(), "1299.00");

        let cheap = Product { price: 5, ..product };
        assert_eq!(cheap.display_price(), "0.05");
    }
}

//! List query parameters
//!
//! Builds the canonical key/value pairs for `GET /products`. The server does
//! exact substring matching on `query`, so values are passed through without
//! trimming or case folding.

/// Snapshot of the filter/page state a single list request is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub category: String,
}

/// Category value that means "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Produce the ordered query parameters for a list request
///
/// `page` and `limit` are always present; `query` only when the search text
/// is non-empty; `category` only when a specific category is selected.
pub fn build_list_params(query: &ListQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
    ];

    if !query.search.is_empty() {
        params.push(("query", query.search.clone()));
    }

    if query.category != ALL_CATEGORIES {
        params.push(("category", query.category.clone()));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(search: &str, category: &str) -> ListQuery {
        ListQuery {
            page: 1,
            limit: 6,
            search: search.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_defaults_emit_only_page_and_limit() {
        let params = build_list_params(&query("", "all"));
        assert_eq!(
            params,
            vec![("page", "1".to_string()), ("limit", "6".to_string())]
        );
    }

    #[test]
    fn test_search_included_when_non_empty() {
        let params = build_list_params(&query("mouse", "all"));
        assert_eq!(params.len(), 3);
        assert_eq!(params[2], ("query", "mouse".to_string()));
    }

    #[test]
    fn test_whitespace_search_is_not_empty() {
        // Only the empty string omits the parameter; no trimming
        let params = build_list_params(&query("  ", "all"));
        assert_eq!(params[2], ("query", "  ".to_string()));
    }

    #[test]
    fn test_category_included_when_specific() {
        let params = build_list_params(&query("", "Books"));
        assert_eq!(params.len(), 3);
        assert_eq!(params[2], ("category", "Books".to_string()));
    }

    #[test]
    fn test_both_filters_in_order() {
        let params = build_list_params(&ListQuery {
            page: 3,
            limit: 6,
            search: "lamp".to_string(),
            category: "Home".to_string(),
        });
        assert_eq!(
            params,
            vec![
                ("page", "3".to_string()),
                ("limit", "6".to_string()),
                ("query", "lamp".to_string()),
                ("category", "Home".to_string()),
            ]
        );
    }

    #[test]
    fn test_values_pass_through_untransformed() {
        let params = build_list_params(&query("MoUsE", "all"));
        assert_eq!(params[2].1, "MoUsE");
    }
}

//! Tests for stale response handling
//!
//! Scenario: list requests resolve out of order. The user types "mo", a
//! request goes out, then types "mou" before the first reply lands. The
//! second request resolves first; the first request's late reply must be
//! discarded, never overwriting the newer results.
//!
//! The same guard protects the detail view: navigating to product B while
//! product A's fetch is still in flight means A's reply is dropped, and a
//! reply arriving after the detail view was closed is dropped too.

use shoptui::api::{FetchError, FetchErrorKind, ListResponse, Product};
use shoptui::model::{CatalogModel, DetailModel, DetailPhase};

fn product(id: &str, name: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: 129900,
        category: "Electronics".to_string(),
        in_stock: true,
        description: None,
    }
}

fn page_of(items: Vec<Product>) -> ListResponse<Product> {
    let total = items.len() as u64;
    ListResponse {
        items,
        page: 1,
        limit: 6,
        total,
    }
}

#[test]
fn test_late_list_reply_does_not_overwrite_newer_results() {
    let mut catalog = CatalogModel::new(6);

    // "mo" request issued, then "mou" before the reply arrives
    catalog.commit_search("mo".to_string());
    let (mo_seq, _) = catalog.begin_fetch();
    catalog.commit_search("mou".to_string());
    let (mou_seq, _) = catalog.begin_fetch();

    // "mou" resolves first
    assert!(catalog.apply_list_result(
        mou_seq,
        Ok(page_of(vec![product("p-7", "Wireless Mouse")]))
    ));
    assert!(!catalog.loading);

    // "mo" straggles in afterwards with a broader result set
    let applied = catalog.apply_list_result(
        mo_seq,
        Ok(page_of(vec![
            product("p-7", "Wireless Mouse"),
            product("p-9", "Monitor Stand"),
        ])),
    );

    assert!(!applied, "stale reply must be discarded");
    assert_eq!(catalog.items.len(), 1);
    assert_eq!(catalog.items[0].id, "p-7");
    assert_eq!(catalog.total_items, 1);
}

#[test]
fn test_late_error_does_not_clobber_newer_success() {
    let mut catalog = CatalogModel::new(6);

    let (old_seq, _) = catalog.begin_fetch();
    let (new_seq, _) = catalog.begin_fetch();

    assert!(catalog.apply_list_result(new_seq, Ok(page_of(vec![product("p-1", "Mug")]))));

    // The abandoned request failing later must not surface an error banner
    let applied = catalog.apply_list_result(
        old_seq,
        Err(FetchError {
            kind: FetchErrorKind::Network,
            message: "Could not connect to server".to_string(),
        }),
    );

    assert!(!applied);
    assert!(catalog.error.is_none());
    assert_eq!(catalog.items.len(), 1);
}

#[test]
fn test_detail_reply_for_previous_product_is_dropped() {
    let mut detail = DetailModel::new();

    let (a_seq, _) = detail.begin_fetch("p-1".to_string());
    let (b_seq, _) = detail.begin_fetch("p-2".to_string());

    // A's reply lands while B is loading
    assert!(!detail.apply_result(a_seq, Ok(product("p-1", "Keyboard"))));
    assert_eq!(detail.phase, DetailPhase::Loading);
    assert_eq!(detail.id, "p-2");

    assert!(detail.apply_result(b_seq, Ok(product("p-2", "Desk Lamp"))));
    match &detail.phase {
        DetailPhase::Loaded(p) => assert_eq!(p.id, "p-2"),
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[test]
fn test_detail_reply_after_close_is_dropped() {
    let mut detail = DetailModel::new();

    let (seq, _) = detail.begin_fetch("p-1".to_string());
    detail.close();

    assert!(!detail.apply_result(seq, Ok(product("p-1", "Keyboard"))));
    assert_eq!(detail.phase, DetailPhase::Idle);

    // A fresh navigation afterwards works normally
    let (seq, _) = detail.begin_fetch("p-3".to_string());
    assert!(detail.apply_result(seq, Ok(product("p-3", "Notebook"))));
}

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::transport::Method;
use crate::net::types::Role;
use crate::test_helpers::{Harness, identity};

fn item(price: Option<f64>) -> ClothingItem {
    ClothingItem {
        id: "c1".to_owned(),
        name: "Denim jacket".to_owned(),
        category: None,
        color: None,
        size: None,
        price,
        image_url: None,
        occasion: None,
        owner: Some("p1".to_owned()),
    }
}

fn signed_in() -> Harness {
    let h = Harness::with_token("t1");
    h.session().login("t1", identity("s1", Role::Styler));
    h
}

#[test]
fn favoriting_adds_and_updates_identity() {
    let h = signed_in();
    h.transport.push_json(200, json!({ "favorites": ["c1"] }));

    let favorites = block_on(toggle_favorite(&h.client, "c1", false)).unwrap();

    assert_eq!(favorites, vec!["c1".to_owned()]);
    let sent = h.transport.last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "http://api.test/users/favorites/c1");
    assert_eq!(h.session().identity().unwrap().favorites, vec!["c1".to_owned()]);
}

#[test]
fn unfavoriting_deletes() {
    let h = signed_in();
    h.transport.push_json(200, json!({ "favorites": [] }));

    block_on(toggle_favorite(&h.client, "c1", true)).unwrap();

    assert_eq!(h.transport.last_request().method, Method::Delete);
    assert!(h.session().identity().unwrap().favorites.is_empty());
}

#[test]
fn failed_toggle_keeps_identity() {
    let h = signed_in();
    h.transport.push_error(ApiError::Network("offline".to_owned()));

    assert!(block_on(toggle_favorite(&h.client, "c1", false)).is_err());
    assert!(h.session().identity().unwrap().favorites.is_empty());
}

#[test]
fn checkout_request_covers_single_item() {
    let req = checkout_request(&item(Some(59.0)));
    assert_eq!(req.amount, 59.0);
    assert_eq!(req.currency, "usd");
    assert_eq!(req.item_ids, vec!["c1".to_owned()]);
}

#[test]
fn buy_posts_payment() {
    let h = signed_in();
    h.transport.push_json(200, json!({ "_id": "pay1", "status": "paid" }));

    let receipt = block_on(buy(&h.client, &item(None))).unwrap();

    assert_eq!(receipt.status, "paid");
    let sent = h.transport.last_request();
    assert_eq!(sent.url, "http://api.test/payment");
    assert_eq!(sent.header("Authorization"), Some("Bearer t1"));
}

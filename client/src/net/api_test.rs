use super::*;
use crate::net::transport::RequestBody;
use crate::net::types::Role;
use crate::test_helpers::{Harness, identity_json};
use futures::executor::block_on;
use serde_json::json;

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn admin_endpoints_embed_user_id() {
    assert_eq!(approve_user_endpoint("u1"), "/admin/approve-user/u1");
    assert_eq!(reject_user_endpoint("u1"), "/admin/reject-user/u1");
}

#[test]
fn catalog_paths_differ_per_collection() {
    assert_eq!(Catalog::Styler.base_path(), "/stylerclothes");
    assert_eq!(Catalog::Partner.item_path("c9"), "/partnerclothes/c9");
}

#[test]
fn occasion_and_favorite_endpoints() {
    assert_eq!(occasion_endpoint("o1"), "/occasion/o1");
    assert_eq!(occasion_suggestions_endpoint("o1"), "/occasion/o1/suggestions");
    assert_eq!(favorite_endpoint("c1"), "/users/favorites/c1");
}

// =============================================================
// Requests on the wire
// =============================================================

#[test]
fn login_posts_credentials_and_decodes_token() {
    let h = Harness::new();
    h.transport.push_json(200, json!({ "token": "t1", "user": identity_json("a1", "admin") }));

    let resp = block_on(h.client.auth().login("a@b.com", "secret1")).unwrap();

    assert_eq!(resp.token, "t1");
    assert_eq!(resp.user.role, Role::Admin);
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://api.test/auth/login");
    assert_eq!(req.body, RequestBody::Json(r#"{"email":"a@b.com","password":"secret1"}"#.to_owned()));
}

#[test]
fn register_posts_role_in_lowercase() {
    let h = Harness::new();
    h.transport.push_json(201, json!({ "token": "t2", "user": identity_json("s1", "styler") }));
    let request = RegisterRequest {
        name: "Sam".to_owned(),
        email: "s@b.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::Partner,
    };

    block_on(h.client.auth().register(&request)).unwrap();

    let RequestBody::Json(raw) = h.transport.last_request().body else {
        panic!("expected JSON body");
    };
    let sent: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(sent["role"], "partner");
}

#[test]
fn approve_and_reject_use_put() {
    let h = Harness::with_token("t1");
    h.transport.push_json(200, json!({ "message": "approved" }));
    h.transport.push_json(200, json!({ "message": "rejected" }));

    block_on(h.client.admin().approve_user("u1")).unwrap();
    block_on(h.client.admin().reject_user("u2")).unwrap();

    let reqs = h.transport.requests();
    assert_eq!(reqs[0].method, Method::Put);
    assert_eq!(reqs[0].url, "http://api.test/admin/approve-user/u1");
    assert_eq!(reqs[1].url, "http://api.test/admin/reject-user/u2");
}

#[test]
fn partner_catalog_crud_hits_partner_collection() {
    let h = Harness::with_token("t1");
    h.transport.push_json(200, json!([{ "_id": "c1", "name": "Dress" }]));
    h.transport.push_status(204);

    let items = block_on(h.client.clothes(Catalog::Partner).list()).unwrap();
    block_on(h.client.clothes(Catalog::Partner).delete("c1")).unwrap();

    assert_eq!(items.len(), 1);
    let reqs = h.transport.requests();
    assert_eq!(reqs[0].url, "http://api.test/partnerclothes");
    assert_eq!(reqs[1].method, Method::Delete);
    assert_eq!(reqs[1].url, "http://api.test/partnerclothes/c1");
}

#[test]
fn favorites_return_updated_list() {
    let h = Harness::with_token("t1");
    h.transport.push_json(200, json!({ "favorites": ["c1", "c2"] }));
    h.transport.push_json(200, json!({ "favorites": ["c2"] }));

    let added = block_on(h.client.users().add_favorite("c1")).unwrap();
    let removed = block_on(h.client.users().remove_favorite("c1")).unwrap();

    assert_eq!(added, vec!["c1".to_owned(), "c2".to_owned()]);
    assert_eq!(removed, vec!["c2".to_owned()]);
    assert_eq!(h.transport.requests()[1].method, Method::Delete);
}

#[test]
fn analytics_decodes_partner_summary() {
    let h = Harness::with_token("t1");
    h.transport.push_json(200, json!({ "totalItems": 4, "totalSales": 9, "revenue": 310.0, "views": 120 }));

    let analytics = block_on(h.client.partners().analytics()).unwrap();

    assert_eq!(analytics.total_items, 4);
    assert_eq!(analytics.total_sales, 9);
    assert_eq!(h.transport.last_request().url, "http://api.test/partners/analytics");
}

#[test]
fn api_errors_propagate_to_caller() {
    let h = Harness::with_token("t1");
    h.transport.push_json(500, json!({ "message": "boom" }));

    let err = block_on(h.client.occasions().list()).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 500, message: "boom".to_owned() });
}

use super::*;
use crate::net::types::Role;
use crate::state::session::SessionStatus;
use crate::test_helpers::{Harness, identity};
use futures::executor::block_on;
use serde_json::json;

// =============================================================
// URL building
// =============================================================

#[test]
fn url_joins_base_and_path() {
    let h = Harness::new();
    assert_eq!(h.client.url("/auth/login"), "http://api.test/auth/login");
    assert_eq!(h.client.url("auth/login"), "http://api.test/auth/login");
}

#[test]
fn new_trims_trailing_slash_from_base() {
    let h = Harness::new();
    let client = HttpClient::new("http://api.test/api/", h.transport.clone(), h.session().clone());
    assert_eq!(client.url("/payment"), "http://api.test/api/payment");
}

// =============================================================
// Credential attachment
// =============================================================

#[test]
fn request_carries_bearer_equal_to_stored_credential() {
    let h = Harness::with_token("t1");
    h.transport.push_json(200, json!([]));

    let _: Vec<serde_json::Value> = block_on(h.client.get_json("/admin/users")).unwrap();

    assert_eq!(h.transport.last_request().header("Authorization"), Some("Bearer t1"));
}

#[test]
fn request_without_credential_has_no_authorization_header() {
    let h = Harness::new();
    h.transport.push_json(200, json!([]));

    let _: Vec<serde_json::Value> = block_on(h.client.get_json("/stylerclothes")).unwrap();

    assert_eq!(h.transport.last_request().header("Authorization"), None);
}

#[test]
fn credential_set_by_login_is_used_for_next_request() {
    let h = Harness::new();
    h.session().login("fresh", identity("u1", Role::Styler));
    h.transport.push_json(200, json!([]));

    let _: Vec<serde_json::Value> = block_on(h.client.get_json("/occasion")).unwrap();

    assert_eq!(h.transport.last_request().header("Authorization"), Some("Bearer fresh"));
}

// =============================================================
// 401 handling
// =============================================================

#[test]
fn unauthorized_response_clears_session_and_redirects() {
    let h = Harness::with_token("t1");
    h.session().login("t1", identity("u1", Role::Admin));
    h.transport.push_status(401);

    let result: Result<serde_json::Value, _> = block_on(h.client.get_json("/admin/pending-users"));

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(h.token(), None);
    assert_eq!(h.session().identity(), None);
    assert_eq!(h.session().status(), SessionStatus::Anonymous);
    assert_eq!(h.navigator.last().as_deref(), Some("/login"));
}

#[test]
fn stale_unauthorized_does_not_clobber_newer_login() {
    let h = Harness::with_token("old");
    let old_epoch = h.session().credential().epoch;

    // A newer login lands while a request from the old session is in flight.
    h.session().login("new", identity("u2", Role::Styler));
    assert!(!h.session().invalidate(old_epoch));

    assert_eq!(h.token().as_deref(), Some("new"));
    assert!(h.session().is_authenticated());
}

#[test]
fn unauthorized_reply_after_newer_login_is_stale_and_keeps_session() {
    let h = Harness::with_token("old");
    h.transport.push_status(401);
    let session = h.session().clone();
    h.transport.before_next_reply(move || session.login("new", identity("u2", Role::Styler)));

    let result: Result<serde_json::Value, _> = block_on(h.client.get_json("/auth/profile"));

    assert_eq!(result, Err(ApiError::StaleSession));
    assert!(!ApiError::StaleSession.is_user_visible());
    assert_eq!(h.token().as_deref(), Some("new"));
    assert!(h.session().is_authenticated());
    assert!(h.navigator.paths().iter().all(|p| p != "/login"));
}

#[test]
fn other_errors_pass_through_without_touching_session() {
    let h = Harness::with_token("t1");
    h.session().login("t1", identity("u1", Role::Partner));
    h.transport.push_json(403, json!({ "message": "Partner not approved" }));

    let result: Result<serde_json::Value, _> = block_on(h.client.get_json("/partners/analytics"));

    assert_eq!(result, Err(ApiError::Forbidden("Partner not approved".to_owned())));
    assert_eq!(h.token().as_deref(), Some("t1"));
    assert!(h.session().is_authenticated());
}

#[test]
fn network_errors_pass_through() {
    let h = Harness::with_token("t1");
    h.transport.push_error(ApiError::Network("offline".to_owned()));

    let result = block_on(h.client.send_empty(Method::Delete, "/occasion/o1"));

    assert_eq!(result, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(h.token().as_deref(), Some("t1"));
}

// =============================================================
// Bodies
// =============================================================

#[test]
fn post_json_serializes_body_and_decodes_reply() {
    let h = Harness::new();
    h.transport.push_json(201, json!({ "ok": true }));

    let reply: serde_json::Value = block_on(h.client.post_json("/payment", &json!({ "amount": 5 }))).unwrap();

    assert_eq!(reply, json!({ "ok": true }));
    let req = h.transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, RequestBody::Json(r#"{"amount":5}"#.to_owned()));
}

#[test]
fn malformed_reply_is_a_parse_error() {
    let h = Harness::new();
    h.transport.push_status(200);

    let result: Result<Vec<String>, _> = block_on(h.client.get_json("/occasion"));

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::test_helpers::{Harness, identity};

#[test]
fn summarize_counts_roles_and_unapproved() {
    let mut partner = identity("p1", Role::Partner);
    partner.is_approved = false;
    let users = vec![identity("a1", Role::Admin), identity("s1", Role::Styler), identity("s2", Role::Styler), partner];

    let summary = summarize(&users);

    assert_eq!(summary, UserSummary { admins: 1, stylers: 2, partners: 1, awaiting_approval: 1 });
}

#[test]
fn summarize_empty_list() {
    assert_eq!(summarize(&[]), UserSummary::default());
}

#[test]
fn users_endpoint_feeds_summary() {
    let h = Harness::with_token("t1");
    h.transport.push_json(
        200,
        json!([
            { "_id": "s1", "email": "s1@fitflow.test", "role": "styler", "isApproved": true },
            { "_id": "p1", "email": "p1@fitflow.test", "role": "partner" }
        ]),
    );

    let users = block_on(h.client.admin().users()).unwrap();

    assert_eq!(summarize(&users), UserSummary { admins: 0, stylers: 1, partners: 1, awaiting_approval: 1 });
    assert_eq!(h.transport.last_request().url, "http://api.test/admin/users");
}

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::transport::Method;
use crate::test_helpers::Harness;

fn occasion(id: &str, title: &str, date: &str) -> Occasion {
    Occasion {
        id: id.to_owned(),
        title: title.to_owned(),
        date: date.to_owned(),
        location: None,
        notes: None,
        items: Vec::new(),
    }
}

#[test]
fn sort_orders_by_date_then_title() {
    let mut list = vec![
        occasion("o1", "Wedding", "2026-12-01"),
        occasion("o2", "Brunch", "2026-11-20"),
        occasion("o3", "Awards", "2026-12-01"),
    ];
    sort_by_date(&mut list);
    let ids: Vec<_> = list.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o2", "o3", "o1"]);
}

#[test]
fn create_posts_then_returns_sorted_list() {
    let h = Harness::with_token("t1");
    h.transport.push_json(201, json!({ "_id": "o9", "title": "Gala", "date": "2026-11-14" }));
    h.transport.push_json(
        200,
        json!([
            { "_id": "o9", "title": "Gala", "date": "2026-11-14" },
            { "_id": "o1", "name": "Brunch", "date": "2026-10-30" }
        ]),
    );
    let draft = OccasionDraft { title: "Gala".to_owned(), date: "2026-11-14".to_owned(), location: None, notes: None };

    let list = block_on(create_and_reload(&h.client, &draft)).unwrap();

    assert_eq!(list[0].title, "Brunch");
    let reqs = h.transport.requests();
    assert_eq!(reqs[0].method, Method::Post);
    assert_eq!(reqs[0].url, "http://api.test/occasion");
}

#[test]
fn delete_then_refetches() {
    let h = Harness::with_token("t1");
    h.transport.push_json(200, json!({ "message": "deleted" }));
    h.transport.push_json(200, json!([]));

    assert!(block_on(delete_and_reload(&h.client, "o1")).unwrap().is_empty());
    assert_eq!(h.transport.requests()[0].url, "http://api.test/occasion/o1");
}

use super::*;
use crate::net::types::Role;

fn pending(id: &str) -> PendingUser {
    PendingUser {
        id: id.to_owned(),
        name: Some(format!("Pending {id}")),
        email: format!("{id}@fitflow.test"),
        role: Role::Partner,
        created_at: None,
    }
}

#[test]
fn default_is_loading_without_actions() {
    let state = ApprovalsState::default();
    assert!(state.loading);
    assert!(!state.is_empty());
    assert!(state.action_ids().is_empty());
}

#[test]
fn zero_pending_shows_empty_state_and_no_actions() {
    let mut state = ApprovalsState::default();
    state.loaded(Vec::new());
    assert!(state.is_empty());
    assert!(state.action_ids().is_empty());
}

#[test]
fn loaded_rows_each_offer_actions() {
    let mut state = ApprovalsState::default();
    state.loaded(vec![pending("u1"), pending("u2")]);
    assert!(!state.is_empty());
    assert_eq!(state.action_ids(), vec!["u1", "u2"]);
}

#[test]
fn loaded_clears_busy_marker() {
    let mut state = ApprovalsState::default();
    state.loaded(vec![pending("u1")]);
    state.busy_id = Some("u1".to_owned());
    assert!(state.is_busy("u1"));
    state.loaded(Vec::new());
    assert!(!state.is_busy("u1"));
}

#[test]
fn failed_keeps_previous_list() {
    let mut state = ApprovalsState::default();
    state.loaded(vec![pending("u1")]);
    state.busy_id = Some("u1".to_owned());
    state.failed();
    assert_eq!(state.items.len(), 1);
    assert!(state.busy_id.is_none());
    assert!(!state.loading);
}

#[test]
fn settled_row_loses_actions_until_next_fetch() {
    let mut state = ApprovalsState::default();
    state.loaded(vec![pending("u1"), pending("u2")]);
    state.busy_id = Some("u1".to_owned());

    state.settled("u1");

    assert!(state.busy_id.is_none());
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.action_ids(), vec!["u2"]);

    state.loaded(vec![pending("u2")]);
    assert!(state.settled.is_empty());
}

#[test]
fn decision_labels() {
    assert_eq!(Decision::Approve.label(), "Approve");
    assert_eq!(Decision::Reject.done_message(), "Account rejected");
}

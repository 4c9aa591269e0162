use super::*;

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "Saved");
    let b = state.push(ToastKind::Info, "Heads up");
    assert!(b > a);
    let messages: Vec<_> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["Saved", "Heads up"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Error, "two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    state.dismiss(a);
    assert_ne!(state.push(ToastKind::Info, "two"), a);
}

#[test]
fn push_error_uses_forbidden_backend_message() {
    let mut state = ToastState::default();
    state.push_error(&ApiError::Forbidden("Account pending approval".to_owned()));
    assert_eq!(state.items[0].kind, ToastKind::Error);
    assert_eq!(state.items[0].message, "Account pending approval");
}

#[test]
fn push_error_translates_network_failure() {
    let mut state = ToastState::default();
    state.push_error(&ApiError::Network("connection refused".to_owned()));
    assert_eq!(state.items[0].message, "Network error, please try again.");
}

#[test]
fn kind_classes_are_distinct() {
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
    assert!(ToastKind::Info.class().contains("toast--info"));
}

#[test]
fn push_error_skips_stale_session() {
    let mut state = ToastState::default();
    assert_eq!(state.push_error(&ApiError::StaleSession), None);
    assert!(state.items.is_empty());
}

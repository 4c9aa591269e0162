use super::*;

// =============================================================
// MemoryTokenStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::default().get(), None);
}

#[test]
fn memory_store_set_overwrites_previous_token() {
    let store = MemoryTokenStore::with_token("old");
    store.set("new");
    assert_eq!(store.get().as_deref(), Some("new"));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryTokenStore::with_token("t1");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_treats_empty_token_as_absent() {
    let store = MemoryTokenStore::default();
    store.set("");
    assert_eq!(store.get(), None);
}

// =============================================================
// Cookie helpers
// =============================================================

#[test]
fn parse_cookie_finds_named_value() {
    assert_eq!(parse_cookie("theme=dark; token=abc.def; lang=en", "token").as_deref(), Some("abc.def"));
}

#[test]
fn parse_cookie_ignores_prefix_matches() {
    assert_eq!(parse_cookie("xtoken=nope; token_old=also", "token"), None);
}

#[test]
fn parse_cookie_treats_empty_value_as_absent() {
    assert_eq!(parse_cookie("token=; other=1", "token"), None);
    assert_eq!(parse_cookie("", "token"), None);
}

#[test]
fn cookie_assignment_is_site_wide_without_expiry() {
    let cookie = cookie_assignment(TOKEN_COOKIE, "t1");
    assert_eq!(cookie, "token=t1; path=/; SameSite=Lax");
    assert!(!cookie.contains("expires"));
}

#[test]
fn cookie_removal_expires_in_the_past() {
    let cookie = cookie_removal(TOKEN_COOKIE);
    assert!(cookie.starts_with("token=;"));
    assert!(cookie.contains("1970"));
}

#[test]
fn cookie_store_reads_nothing_outside_the_browser() {
    let store = CookieTokenStore::default();
    store.set("t1");
    assert_eq!(store.get(), None);
}

//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive mirror of [`Session`](super::session::Session), kept in sync by
//! a session listener installed in `App`. Route guards and user-aware
//! components read this instead of locking the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::SessionStatus;
use crate::net::types::Identity;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<Identity>,
    /// `true` until the session has resolved to signed-in or anonymous.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::from_status(&SessionStatus::Unknown)
    }
}

impl AuthState {
    pub fn from_status(status: &SessionStatus) -> Self {
        Self { user: status.identity().cloned(), loading: !status.is_resolved() }
    }
}

//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same rule through the `RouteGuard`
//! component. The guard is a UX gate only: approval status is not checked
//! here and the backend remains the real authority.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::paths;
use crate::state::auth::AuthState;

/// What a guarded route should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving; show a neutral placeholder.
    Pending,
    /// Nobody signed in; go to the login view.
    RedirectToLogin,
    /// Signed in with a role the route does not admit; send the user to
    /// their own landing view instead.
    Denied { landing: &'static str },
    Allow,
}

impl GuardOutcome {
    /// Path to navigate to, if any.
    pub fn redirect(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(paths::LOGIN),
            Self::Denied { landing } => Some(landing),
            Self::Pending | Self::Allow => None,
        }
    }
}

/// Decide access to a route admitting `allowed` roles.
pub fn evaluate(state: &AuthState, allowed: &[Role]) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Pending;
    }
    match &state.user {
        None => GuardOutcome::RedirectToLogin,
        Some(user) if allowed.contains(&user.role) => GuardOutcome::Allow,
        Some(user) => GuardOutcome::Denied { landing: user.role.landing_path() },
    }
}

/// Where `/` should send the current visitor, once known.
pub fn home_target(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    Some(state.user.as_ref().map_or(paths::LOGIN, |user| user.role.landing_path()))
}

/// Login and register pages bounce signed-in users to their landing view.
pub fn signed_in_landing(state: &AuthState) -> Option<&'static str> {
    state.user.as_ref().map(|user| user.role.landing_path())
}

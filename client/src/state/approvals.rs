//! Pending-account queue shown on the admin approvals page.
//!
//! The list is a query result: after every approve/reject it is replaced by
//! a fresh fetch, never patched locally.

#[cfg(test)]
#[path = "approvals_test.rs"]
mod approvals_test;

use crate::net::types::PendingUser;

/// Message shown when nobody is waiting.
pub const EMPTY_MESSAGE: &str = "No accounts are waiting for approval.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
        }
    }

    pub fn done_message(self) -> &'static str {
        match self {
            Self::Approve => "Account approved",
            Self::Reject => "Account rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApprovalsState {
    pub items: Vec<PendingUser>,
    pub loading: bool,
    /// Account whose decision is in flight; its buttons are disabled.
    pub busy_id: Option<String>,
    /// Accounts already decided whose row is still on screen because the
    /// follow-up fetch failed. They offer no actions.
    pub settled: Vec<String>,
}

impl Default for ApprovalsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, busy_id: None, settled: Vec::new() }
    }
}

impl ApprovalsState {
    /// Replace the list with a fresh fetch result.
    pub fn loaded(&mut self, items: Vec<PendingUser>) {
        self.items = items;
        self.loading = false;
        self.busy_id = None;
        self.settled.clear();
    }

    /// Reset in-flight markers after a failed request, keeping the last list.
    pub fn failed(&mut self) {
        self.loading = false;
        self.busy_id = None;
    }

    /// The decision on `id` went through but the queue could not be
    /// re-fetched.
    pub fn settled(&mut self, id: &str) {
        self.failed();
        if !self.is_settled(id) {
            self.settled.push(id.to_owned());
        }
    }

    pub fn is_settled(&self, id: &str) -> bool {
        self.settled.iter().any(|s| s == id)
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.items.is_empty()
    }

    /// Ids of rows that render approve/reject buttons.
    pub fn action_ids(&self) -> Vec<&str> {
        if self.loading {
            return Vec::new();
        }
        self.items
            .iter()
            .map(|user| user.id.as_str())
            .filter(|id| !self.is_settled(id))
            .collect()
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.busy_id.as_deref() == Some(id)
    }
}

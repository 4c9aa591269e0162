//! Transient notifications shown over every page.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use crate::net::error::ApiError;

/// How long a toast stays up before auto-dismissal, in milliseconds.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Append an error toast carrying the user-facing text for `err`, unless
    /// the error is not meant to be shown.
    pub fn push_error(&mut self, err: &ApiError) -> Option<u64> {
        err.is_user_visible().then(|| self.push(ToastKind::Error, err.user_message()))
    }

    /// Remove toast `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

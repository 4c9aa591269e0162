//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` and `token_store` hold the authoritative auth lifecycle and are
//! independent of the reactive runtime. `auth` and `toasts` are small
//! reactive models that components read through Leptos context.

pub mod approvals;
pub mod auth;
pub mod session;
pub mod toasts;
pub mod token_store;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. The request sequences a page
//! runs (submit, decide-then-reload, and so on) are plain async functions
//! over `HttpClient` so they can be tested without a browser; the
//! components only wire them to signals and toasts.

pub mod admin;
pub mod approvals;
pub mod home;
pub mod login;
pub mod occasions;
pub mod partner;
pub mod profile;
pub mod register;
pub mod styler;

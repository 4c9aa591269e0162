//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome and form pieces while reading the
//! session mirror, toasts, HTTP client and uploader from Leptos context.

pub mod clothing_card;
pub mod clothing_editor;
pub mod field_error;
pub mod image_picker;
pub mod nav_bar;
pub mod route_guard;
pub mod toasts;

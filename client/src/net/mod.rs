//! Networking modules for the FitFlow backend and image hosting.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves bytes, `http` is the authenticated request pipeline,
//! `api` holds one typed client per resource, `upload` picks an image
//! destination, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod upload;

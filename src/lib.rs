//! Recipe API library crate.
//!
//! Exposes the shared API DTOs under [`model`] and the axum server under [`server`].

pub mod model;
pub mod server;

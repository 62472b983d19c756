//! HTTP controller endpoints for the recipe API.
//!
//! Axum handlers for user accounts and recipes. Handlers resolve the session user, call into
//! services, and return JSON responses; each is annotated with utoipa for the OpenAPI document.

pub mod recipe;
pub mod user;
pub mod util;

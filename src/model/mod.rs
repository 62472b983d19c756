//! Data transfer objects shared by the HTTP API and its consumers.

pub mod api;
pub mod recipe;
pub mod user;

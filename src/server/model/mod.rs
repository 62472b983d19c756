//! Server application models and type definitions.
//!
//! Application state shared by handlers, type aliases for sea-orm entity models, and typed
//! wrappers around session data.

pub mod app;
pub mod db;
pub mod session;

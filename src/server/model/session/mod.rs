//! Session data models and utilities.
//!
//! Type-safe wrappers for values stored in the tower-sessions session. The session store is
//! Redis-backed in production and in-memory in tests.

pub mod user;

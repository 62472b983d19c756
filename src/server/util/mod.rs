//! Utility functions and helpers for server operations.
//!
//! Small, database-free helpers used by the service layer: email domain normalization and Argon2
//! password hashing.

pub mod email;
pub mod password;

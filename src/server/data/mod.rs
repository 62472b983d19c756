//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for a single table each and return entity models or
//! `DbErr`; they contain no business rules.

pub mod recipe;
pub mod user;

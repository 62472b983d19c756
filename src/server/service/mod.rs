//! Service layer for business logic.
//!
//! Services validate input, enforce account rules, and convert repository models into the
//! DTOs returned by controllers.

pub mod recipe;
pub mod user;

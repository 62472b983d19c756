//! Shared test utilities for the recipe API workspace.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables and fixtures, and
//! `build()` produces a [`TestContext`] holding a fresh in-memory SQLite database and
//! session. Nothing is shared between tests.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD_HASH, TEST_USER_EMAIL, TEST_USER_TWO_EMAIL},
        TestBuilder, TestContext, TestError,
    };
}

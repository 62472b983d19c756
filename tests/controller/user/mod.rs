//! Tests for user controller endpoints.

mod get_me;

use super::*;

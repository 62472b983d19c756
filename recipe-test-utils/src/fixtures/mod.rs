//! Database fixtures inserted directly through sea-orm, bypassing the HTTP layer.
//!
//! - `user` - user account records
//!
//! Recipes are created through the application's own `RecipeRepository` so tests exercise the
//! same validation as the service.

pub mod user;

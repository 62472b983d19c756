//! Database model type aliases.
//!
//! Short names for the sea-orm models generated in the `entity` crate.

/// Type alias for a user account database model.
///
/// # Fields (from `entity::app_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Unique login email, domain lowercased
/// - `name` - Display name, may be empty
/// - `password_hash` - Argon2 PHC string, never the plaintext password
/// - `created_at` - Timestamp when the account was created
pub type UserModel = entity::app_user::Model;

/// Type alias for a recipe database model.
///
/// # Fields (from `entity::recipe::Model`)
/// - `id` - Primary key, increases in creation order
/// - `user_id` - Foreign key to the owning user, never reassigned
/// - `title` - Recipe title
/// - `time_minutes` - Preparation time in minutes
/// - `price` - Price with two decimal places
/// - `created_at` - Timestamp when the recipe was created
pub type RecipeModel = entity::recipe::Model;

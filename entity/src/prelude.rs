pub use super::app_user::Entity as AppUser;
pub use super::recipe::Entity as Recipe;

use sea_orm::DatabaseConnection;

use crate::{
    model::recipe::RecipeDto,
    server::{data::recipe::RecipeRepository, error::Error},
};

/// Service for reading recipes on behalf of a user.
pub struct RecipeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecipeService<'a> {
    /// Creates a new instance of RecipeService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the recipes owned by `user_id`, most recently created first.
    ///
    /// Recipes belonging to any other user are never included.
    pub async fn list_recipes(&self, user_id: i32) -> Result<Vec<RecipeDto>, Error> {
        let recipes = RecipeRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(recipes.into_iter().map(RecipeDto::from).collect())
    }
}

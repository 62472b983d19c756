use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use validator::{Validate, ValidationError};

use crate::server::{
    error::{recipe::RecipeError, Error},
    model::db::RecipeModel,
};

/// Values for a recipe created directly against the store.
///
/// [`NewRecipe::default`] yields the sample recipe: "Sample recipe", 10 minutes, 5.99.
#[derive(Clone, Debug, PartialEq, Validate)]
pub struct NewRecipe {
    pub title: String,
    #[validate(range(min = 0))]
    pub time_minutes: i32,
    #[validate(custom(function = non_negative_price))]
    pub price: Decimal,
}

impl Default for NewRecipe {
    fn default() -> Self {
        Self {
            title: "Sample recipe".to_string(),
            time_minutes: 10,
            price: Decimal::new(599, 2),
        }
    }
}

fn non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("range"));
    }

    Ok(())
}

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a recipe owned by `user_id`
    ///
    /// # Returns
    /// - `Ok(RecipeModel)` - The stored recipe
    /// - `Err(Error::RecipeError)` - `time_minutes` or `price` is negative, nothing is stored
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, user_id: i32, recipe: NewRecipe) -> Result<RecipeModel, Error> {
        recipe.validate().map_err(RecipeError::from)?;

        let recipe = entity::recipe::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            title: ActiveValue::Set(recipe.title),
            time_minutes: ActiveValue::Set(recipe.time_minutes),
            price: ActiveValue::Set(recipe.price),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(recipe.insert(self.db).await?)
    }

    /// Gets all recipes owned by `user_id`, most recently created first
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::UserId.eq(user_id))
            .order_by_desc(entity::recipe::Column::Id)
            .all(self.db)
            .await
    }
}

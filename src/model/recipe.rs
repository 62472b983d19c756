use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Serialized form of a recipe returned by the recipe list endpoint.
///
/// Fields are, in order: `id`, `title`, `time_minutes`, `price`. The owning user is
/// implied by the authenticated session and is never part of the payload. `price` is
/// rendered as a string with two decimal places, e.g. `"5.99"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeDto {
    pub id: i32,
    pub title: String,
    pub time_minutes: i32,
    #[schema(value_type = String, example = "5.99")]
    pub price: Decimal,
}

impl From<entity::recipe::Model> for RecipeDto {
    fn from(recipe: entity::recipe::Model) -> Self {
        let mut price = recipe.price;
        price.rescale(2);

        Self {
            id: recipe.id,
            title: recipe.title,
            time_minutes: recipe.time_minutes,
            price,
        }
    }
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, recipe::RecipeDto},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::recipe::RecipeService,
    },
};

pub static RECIPE_TAG: &str = "recipe";

/// List recipes owned by the logged in user, most recently created first
#[utoipa::path(
    get,
    path = "/api/recipe/recipes",
    tag = RECIPE_TAG,
    responses(
        (status = 200, description = "Recipes owned by the logged in user", body = Vec<RecipeDto>),
        (status = 401, description = "No user is logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let recipes = RecipeService::new(&state.db).list_recipes(user.id).await?;

    Ok((StatusCode::OK, Json(recipes)))
}

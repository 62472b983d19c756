//! HTTP routing and OpenAPI documentation configuration.
//!
//! Registers every API endpoint with its utoipa specification and serves Swagger UI at
//! `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/user/create` - Create a user account
/// - `POST /api/user/login` - Log in and attach the user to the session
/// - `POST /api/user/logout` - Clear the session
/// - `GET /api/user/me` - Get the logged in user
/// - `GET /api/recipe/recipes` - List the logged in user's recipes
///
/// The session layer is not applied here; callers add a `SessionManagerLayer` after
/// attaching state so tests can use an in-memory store.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Recipe API", description = "Recipe API"), tags(
        (name = controller::user::USER_TAG, description = "User account API routes"),
        (name = controller::recipe::RECIPE_TAG, description = "Recipe API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::login))
        .routes(routes!(controller::user::logout))
        .routes(routes!(controller::user::get_me))
        .routes(routes!(controller::recipe::list_recipes))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

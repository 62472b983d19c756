use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::model::api::ErrorDto;

/// Recipe store failures.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// `time_minutes` or `price` is negative.
    #[error("Recipe time and price must not be negative: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected recipe: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

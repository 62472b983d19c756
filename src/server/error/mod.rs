//! Error types for the recipe API server.
//!
//! Each domain (authentication, user accounts, recipes, configuration) has its own `thiserror`
//! enum with an `IntoResponse` implementation, all folded into the top-level [`Error`] so
//! handlers can use `?` throughout.

pub mod auth;
pub mod config;
pub mod recipe;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, recipe::RecipeError, user::UserError,
    },
};

/// Main error type for the recipe API server.
///
/// Aggregates domain-specific errors and external library errors. The `IntoResponse`
/// implementation delegates to the domain error where one exists and otherwise returns a
/// generic 500 response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing session, stale session, bad credentials).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// User account error (validation, duplicate email, password hashing).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Recipe error (negative time or price).
    #[error(transparent)]
    RecipeError(#[from] RecipeError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid account or recipe input, or bad login credentials
/// - 401 Unauthorized - No valid user attached to the session
/// - 500 Internal Server Error - Everything else (logged at error level)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::RecipeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

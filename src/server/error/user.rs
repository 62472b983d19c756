use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::ErrorDto,
    server::{error::InternalServerError, util::password::MIN_PASSWORD_LENGTH},
};

/// User account failures.
#[derive(Error, Debug)]
pub enum UserError {
    /// The email is not a valid address.
    #[error("Enter a valid email address")]
    InvalidEmail,
    /// The password is shorter than the minimum length.
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    /// An account already uses this email.
    #[error("A user with this email already exists")]
    EmailTaken,
    /// Argon2 failed to hash or parse a password hash.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

/// Maps failed `CreateUserDto` validation onto the field that failed, email first.
impl From<ValidationErrors> for UserError {
    fn from(errors: ValidationErrors) -> Self {
        if errors.field_errors().contains_key("email") {
            Self::InvalidEmail
        } else {
            Self::PasswordTooShort(MIN_PASSWORD_LENGTH)
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::PasswordHash(_) => InternalServerError(self).into_response(),
            err => {
                tracing::debug!("Rejected user input: {}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

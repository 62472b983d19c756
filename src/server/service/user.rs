use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use validator::Validate;

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, user::UserError, Error},
        util::{
            email::normalize_email,
            password::{hash_password, verify_password},
        },
    },
};

/// Service for user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user account.
    ///
    /// The payload is validated first, then the email is normalized before the uniqueness
    /// check and the password is stored only as an Argon2 hash.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::UserError)` - Invalid email, short password, or email already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, payload: &CreateUserDto) -> Result<UserDto, Error> {
        payload.validate().map_err(UserError::from)?;

        let email = normalize_email(&payload.email);
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(UserError::EmailTaken.into());
        }

        let password_hash = hash_password(&payload.password)?;
        let user = user_repo
            .create(&email, payload.name.trim(), &password_hash)
            .await
            .map_err(email_taken_on_conflict)?;

        tracing::info!(user_id = %user.id, "Created user");

        Ok(user.into())
    }

    /// Checks an email and password pair against stored accounts.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Credentials match an account
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserDto, Error> {
        let email = normalize_email(email);

        let Some(user) = UserRepository::new(self.db).get_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user.into())
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).get_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }
}

/// A concurrent signup can pass the email lookup and still lose the race on the unique index.
fn email_taken_on_conflict(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::EmailTaken.into(),
        _ => err.into(),
    }
}

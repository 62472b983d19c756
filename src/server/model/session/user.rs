use serde::{Deserialize, Serialize};
use tower_sessions::{session, Session};

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "recipe_api:user:id";

/// ID of the logged in user, stored in the session as a JSON number.
#[derive(Clone, Copy, Default, Deserialize, Serialize, Debug, PartialEq)]
pub struct SessionUserId(pub i32);

impl SessionUserId {
    /// Attach `user_id` to the session
    pub async fn insert(session: &Session, user_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(user_id))
            .await?;

        Ok(())
    }

    /// Get the logged in user ID from the session.
    ///
    /// A stored value that is not a user ID is treated as no login: the session is cleared
    /// and `Ok(None)` returned, so callers answer with 401 rather than 500.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - A user ID is attached to the session
    /// - `Ok(None)` - No user ID, or an unreadable one that has now been cleared
    /// - `Err(Error::SessionError)` - The session store failed
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        match session.get::<SessionUserId>(SESSION_USER_ID_KEY).await {
            Ok(user_id) => Ok(user_id.map(|SessionUserId(id)| id)),
            Err(session::Error::SerdeJson(e)) => {
                session.clear().await;

                tracing::warn!("Session cleared for unreadable user ID: {}", e);

                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

//! Type-safe session management wrappers.
//!
//! This module provides a type-safe interface for user authentication state stored
//! in the session. Wrapping the raw `Session` behind a focused struct prevents key
//! typos, ensures type consistency, and centralizes session-related logic.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state including storing and retrieving the
/// authenticated user's id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after successful authentication to establish a logged-in session.
    ///
    /// # Arguments
    /// - `user_id` - The user's database id
    ///
    /// # Returns
    /// - `Ok(())` - User id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// Used to identify the currently authenticated user.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in, returns their id
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove all session data including authentication state.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The caller has not logged in or their session expired. Results in a
    /// 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// The stored user id did not match any user row, e.g. the account was
    /// removed while a session was still live. Results in a 404 Not Found
    /// response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the precise cause is carried in the
/// error for server-side logging.
///
/// # Returns
/// - 401 Unauthorized - For missing session authentication
/// - 404 Not Found - For sessions referencing a deleted user
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

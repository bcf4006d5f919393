use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the mentorship request state machine.
#[derive(Error, Debug)]
pub enum RequestError {
    /// A user attempted an action reserved for the other role, e.g. a mentor
    /// creating a request or a student accepting one.
    ///
    /// Results in a 403 Forbidden response with the given detail message.
    #[error("{0}")]
    RoleMismatch(String),

    /// The student already has a request in status pending or accepted.
    ///
    /// The one-active-request-per-student invariant spans all mentors, so a
    /// second request cannot be created until the first is declined. Results
    /// in a 409 Conflict response.
    #[error("An active mentorship request already exists")]
    DuplicateActiveRequest,

    /// The acting mentor is not the target of the request.
    ///
    /// Results in a 403 Forbidden response with the given detail message.
    #[error("{0}")]
    Forbidden(String),

    /// Accept or decline was attempted on a request that already left the
    /// pending state. The terminal states are stable endpoints; re-running
    /// the accept cascade on them is rejected.
    ///
    /// Results in a 409 Conflict response.
    #[error("Request is already {status}")]
    InvalidStateTransition { status: String },
}

/// Converts request lifecycle errors into HTTP responses.
///
/// # Returns
/// - 403 Forbidden - For `RoleMismatch` and `Forbidden`
/// - 409 Conflict - For `DuplicateActiveRequest` and `InvalidStateTransition`
impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::RoleMismatch(_) | Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::DuplicateActiveRequest | Self::InvalidStateTransition { .. } => {
                StatusCode::CONFLICT
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by the messaging authorization gate and payload validation.
#[derive(Error, Debug)]
pub enum MessageError {
    /// The two users do not resolve to one student and one mentor.
    ///
    /// Messaging is only defined between a student and a mentor; two students,
    /// two mentors, or any other combination is rejected. Results in a 403
    /// Forbidden response.
    #[error("Invalid user roles for messaging")]
    InvalidRolePair,

    /// No accepted mentorship request links the two users.
    ///
    /// Results in a 403 Forbidden response with the given detail message.
    #[error("{0}")]
    Forbidden(String),

    /// The sending mentor's accepted mentee count exceeds the limit.
    ///
    /// The guard fires when the count is strictly greater than 5 and only on
    /// the send path; acceptance itself carries no capacity check. Results in
    /// a 403 Forbidden response.
    #[error("You have reached the maximum limit of 5 mentees")]
    CapacityExceeded,

    /// The message payload failed validation: neither content nor file
    /// present, the file is over the 2 MiB limit, or its MIME type is not
    /// allow-listed.
    ///
    /// Results in a 400 Bad Request response with the given detail message.
    #[error("{0}")]
    Validation(String),
}

/// Converts messaging errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 403 Forbidden - For `InvalidRolePair`, `Forbidden` and `CapacityExceeded`
impl IntoResponse for MessageError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRolePair | Self::Forbidden(_) | Self::CapacityExceeded => {
                StatusCode::FORBIDDEN
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

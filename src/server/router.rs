use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{get_user, login, logout},
        message::{get_message_history, send_message, stream_messages},
        request::{
            accept_request, create_request, decline_request, get_mentor_requests,
            get_student_requests,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/requests", post(create_request))
        .route("/api/requests/student", get(get_student_requests))
        .route("/api/requests/mentor", get(get_mentor_requests))
        .route("/api/requests/{request_id}/accept", patch(accept_request))
        .route("/api/requests/{request_id}/decline", patch(decline_request))
        .route("/api/messages", post(send_message))
        .route("/api/messages/{user_id}", get(get_message_history))
        .route("/api/messages/{user_id}/stream", get(stream_messages))
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::LoginDto,
    server::{
        data::user::UserRepository, error::AppError, middleware::auth::AuthGuard,
        middleware::session::AuthSession, state::AppState,
    },
};

/// POST /api/auth/login - Establish a session for an existing user
///
/// Looks up the user by username and stores their id in the session.
/// Credential verification is the external identity provider's job; this
/// endpoint only binds an already-verified identity to a session.
///
/// # Returns
/// - `200 OK`: UserDto for the logged-in user
/// - `404 Not Found`: No user with that username
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo = UserRepository::new(&state.db);

    let Some(user) = user_repo.find_by_username(&payload.username).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/logout - Clear the current session
///
/// # Returns
/// - `200 OK`: Session cleared (idempotent; succeeds even when not logged in)
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    StatusCode::OK
}

/// GET /api/auth/user - Get the currently authenticated user
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: UserDto for the session user
/// - `401 Unauthorized`: No user in session
/// - `404 Not Found`: Session user no longer exists
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::request::{CreateRequestDto, DeclineRequestDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::request::EnrichedRequest,
        service::request::MentorshipService,
        state::AppState,
    },
};

/// POST /api/requests - Create a mentorship request
///
/// Creates a pending request from the authenticated student to the given
/// mentor. A student may hold at most one active (pending or accepted)
/// request across all mentors.
///
/// # Authentication
/// Requires user to be logged in with the student role
///
/// # Returns
/// - `201 Created`: MentorshipRequestDto for the new pending request
/// - `403 Forbidden`: Caller is not a student or target is not a mentor
/// - `404 Not Found`: Target user does not exist
/// - `409 Conflict`: Caller already has an active request
pub async fn create_request(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let mentorship_service = MentorshipService::new(&state.db);
    let request = mentorship_service
        .create_request(&user, payload.mentor_id, payload.message)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// GET /api/requests/student - List the caller's sent requests
///
/// Returns all requests where the caller is the student, newest first,
/// enriched with each mentor's profile summary.
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: JSON array of EnrichedRequestDto
pub async fn get_student_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let mentorship_service = MentorshipService::new(&state.db);
    let requests = mentorship_service.list_for_student(&user).await?;

    let requests_dto: Vec<_> = requests.into_iter().map(EnrichedRequest::into_dto).collect();

    Ok((StatusCode::OK, Json(requests_dto)))
}

/// GET /api/requests/mentor - List the caller's incoming requests
///
/// Returns all requests targeting the caller as mentor, newest first,
/// enriched with each student's profile summary.
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `200 OK`: JSON array of EnrichedRequestDto
pub async fn get_mentor_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let mentorship_service = MentorshipService::new(&state.db);
    let requests = mentorship_service.list_for_mentor(&user).await?;

    let requests_dto: Vec<_> = requests.into_iter().map(EnrichedRequest::into_dto).collect();

    Ok((StatusCode::OK, Json(requests_dto)))
}

/// PATCH /api/requests/{request_id}/accept - Accept a pending request
///
/// Accepts the request and, in the same transaction, declines all other
/// pending requests of the same student.
///
/// # Authentication
/// Requires user to be logged in as the request's target mentor
///
/// # Path Parameters
/// - `request_id`: Id of the request to accept
///
/// # Returns
/// - `200 OK`: MentorshipRequestDto with status accepted
/// - `403 Forbidden`: Caller is not the target mentor
/// - `404 Not Found`: Request does not exist
/// - `409 Conflict`: Request is no longer pending
pub async fn accept_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let mentorship_service = MentorshipService::new(&state.db);
    let request = mentorship_service.accept_request(&user, request_id).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// PATCH /api/requests/{request_id}/decline - Decline a pending request
///
/// Declines the request and stores the caller's rejection reason.
///
/// # Authentication
/// Requires user to be logged in as the request's target mentor
///
/// # Path Parameters
/// - `request_id`: Id of the request to decline
///
/// # Returns
/// - `200 OK`: MentorshipRequestDto with status declined
/// - `403 Forbidden`: Caller is not the target mentor
/// - `404 Not Found`: Request does not exist
/// - `409 Conflict`: Request is no longer pending
pub async fn decline_request(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    session: Session,
    Json(payload): Json<DeclineRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let mentorship_service = MentorshipService::new(&state.db);
    let request = mentorship_service
        .decline_request(&user, request_id, payload.rejection_reason)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

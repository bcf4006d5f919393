use std::{convert::Infallible, time::Duration};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse,
    },
    Json,
};
use chrono::Utc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tower_sessions::Session;

use crate::{
    model::message::SendMessageDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::message::{Attachment, Message},
        service::message::MessageService,
        state::AppState,
    },
};

/// Seconds between polls of the delivery log in the live update stream.
const POLL_INTERVAL_SECS: u64 = 2;

/// POST /api/messages - Send a message
///
/// Sends a message from the authenticated user to a matched counterpart.
/// The pair must resolve to one student and one mentor linked by an accepted
/// mentorship request, and the payload must carry text content or a valid
/// attachment (≤ 2 MiB, allow-listed MIME type).
///
/// # Authentication
/// Requires user to be logged in
///
/// # Returns
/// - `201 Created`: MessageDto with the server-assigned timestamp
/// - `400 Bad Request`: Empty payload or invalid attachment
/// - `403 Forbidden`: Role pair invalid, no accepted mentorship, or mentor over capacity
/// - `404 Not Found`: Receiver does not exist
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let message_service = MessageService::new(&state.db);
    let message = message_service
        .send_message(
            &user,
            payload.receiver_id,
            payload.content,
            payload.file.map(Attachment::from_dto),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// GET /api/messages/{user_id} - Get the conversation with another user
///
/// Returns all messages exchanged with the given user in both directions,
/// oldest first.
///
/// # Authentication
/// Requires user to be logged in with an accepted mentorship linking the pair
///
/// # Path Parameters
/// - `user_id`: Id of the conversation counterpart
///
/// # Returns
/// - `200 OK`: JSON array of MessageDto in ascending timestamp order
/// - `403 Forbidden`: No accepted mentorship links the pair
/// - `404 Not Found`: Counterpart does not exist
pub async fn get_message_history(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let message_service = MessageService::new(&state.db);
    let messages = message_service.fetch_history(&user, user_id).await?;

    let messages_dto: Vec<_> = messages.into_iter().map(Message::into_dto).collect();

    Ok((StatusCode::OK, Json(messages_dto)))
}

/// GET /api/messages/{user_id}/stream - Live updates for a conversation
///
/// Server-sent event stream of new messages in the conversation. After the
/// same authorization check as the history endpoint, a poll task queries the
/// delivery log every 2 seconds for messages newer than its checkpoint and
/// emits each one as a discrete SSE event in timestamp order. The task stops
/// at the top of the next cycle once the client disconnects.
///
/// # Authentication
/// Requires user to be logged in with an accepted mentorship linking the pair
///
/// # Path Parameters
/// - `user_id`: Id of the conversation counterpart
///
/// # Returns
/// - `200 OK`: `text/event-stream` of MessageDto events
/// - `403 Forbidden`: No accepted mentorship links the pair
/// - `404 Not Found`: Counterpart does not exist
pub async fn stream_messages(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require().await?;

    let message_service = MessageService::new(&state.db);
    message_service.authorize_pair(&user, user_id).await?;

    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(16);
    let db = state.db.clone();
    let requester_id = user.id;

    tokio::spawn(async move {
        let message_service = MessageService::new(&db);
        let mut checkpoint = Utc::now();

        loop {
            // Cancellation point: the receiver is dropped when the client
            // disconnects.
            if tx.is_closed() {
                break;
            }

            tokio::time::sleep(Duration::from_secs(POLL_INTERVAL_SECS)).await;

            let now = Utc::now();
            let messages = match message_service
                .fetch_new_messages(requester_id, user_id, checkpoint)
                .await
            {
                Ok(messages) => messages,
                Err(e) => {
                    tracing::error!("Message stream poll failed: {}", e);
                    break;
                }
            };

            for message in messages {
                let event = match Event::default().json_data(message.into_dto()) {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::error!("Failed to serialize message event: {}", e);
                        continue;
                    }
                };

                if tx.send(Ok(event)).await.is_err() {
                    return;
                }
            }

            checkpoint = now;
        }
    });

    Ok(Sse::new(ReceiverStream::new(rx)).keep_alive(KeepAlive::default()))
}

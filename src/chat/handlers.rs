/**
 * Room and Message HTTP Handlers
 *
 * This module implements the REST surface for the room directory and the
 * message log. All routes here sit behind the auth middleware; handlers
 * that need the caller's identity take the `AuthUser` extractor.
 *
 * # Endpoints
 *
 * - `GET /rooms` - List all rooms
 * - `POST /rooms` - Create a room
 * - `GET /rooms/{room_id}` - Room detail with recent messages
 * - `GET /rooms/{room_id}/messages` - Paginated message history
 * - `POST /rooms/{room_id}/messages` - Submit a message
 */

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::store::messages::Message;
use crate::store::rooms::{Room, RoomDirectory};

/// Room creation request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateRoomRequest {
    /// Room display name
    pub name: String,
}

/// Message submission request
#[derive(Deserialize, Serialize, Debug)]
pub struct PostMessageRequest {
    /// Message body
    pub content: String,
}

/// Query parameters for message history
#[derive(Deserialize, Debug, Default)]
pub struct ListMessagesQuery {
    /// Page size (defaults to 50, capped at 200)
    pub limit: Option<usize>,
    /// Exclusive upper bound on message timestamps (RFC 3339)
    pub before: Option<DateTime<Utc>>,
}

/// Room detail response: the room plus its most recent messages
#[derive(Serialize, Deserialize, Debug)]
pub struct RoomDetailResponse {
    /// The room
    pub room: Room,
    /// Most recent messages, chronological, at most one default page
    pub messages: Vec<Message>,
}

/// List all rooms (GET /rooms)
///
/// Returns every room, oldest first.
pub async fn list_rooms(State(rooms): State<Arc<RoomDirectory>>) -> Json<Vec<Room>> {
    Json(rooms.list().await)
}

/// Create a room (POST /rooms)
///
/// # Errors
///
/// * `400 Bad Request` - If the name is empty or whitespace-only
/// * `401 Unauthorized` - If the caller is not authenticated
pub async fn create_room(
    State(rooms): State<Arc<RoomDirectory>>,
    user: AuthUser,
    Json(request): Json<CreateRoomRequest>,
) -> Result<Json<Room>, ApiError> {
    let room = rooms.create(request.name, user.user_id).await?;
    Ok(Json(room))
}

/// Get a room with its recent history (GET /rooms/{room_id})
///
/// # Errors
///
/// * `404 Not Found` - If the room does not exist
/// * `401 Unauthorized` - If the caller is not authenticated
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<uuid::Uuid>,
) -> Result<Json<RoomDetailResponse>, ApiError> {
    let room = state
        .rooms
        .get(room_id)
        .await
        .ok_or_else(|| ApiError::not_found("Room"))?;

    let messages = state.messages.list(room_id, None, None).await;

    Ok(Json(RoomDetailResponse { room, messages }))
}

/// List a room's messages (GET /rooms/{room_id}/messages)
///
/// Supports backwards pagination: pass `before` set to the timestamp of
/// the oldest message already held and the next page ends just before it.
///
/// # Errors
///
/// * `404 Not Found` - If the room does not exist
/// * `401 Unauthorized` - If the caller is not authenticated
pub async fn list_messages(
    State(state): State<AppState>,
    Path(room_id): Path<uuid::Uuid>,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<Message>>, ApiError> {
    if !state.rooms.exists(room_id).await {
        return Err(ApiError::not_found("Room"));
    }

    let messages = state.messages.list(room_id, query.limit, query.before).await;

    Ok(Json(messages))
}

/// Submit a message (POST /rooms/{room_id}/messages)
///
/// Appends the message and fans it out to the room's live subscribers
/// before responding.
///
/// # Errors
///
/// * `400 Bad Request` - If the content is empty or whitespace-only
/// * `404 Not Found` - If the room does not exist
/// * `401 Unauthorized` - If the caller is not authenticated
pub async fn post_message(
    State(state): State<AppState>,
    Path(room_id): Path<uuid::Uuid>,
    user: AuthUser,
    Json(request): Json<PostMessageRequest>,
) -> Result<Json<Message>, ApiError> {
    let message = state
        .chat
        .post_message(room_id, user.user_id, request.content)
        .await?;

    tracing::info!("Message posted to room {} by {}", room_id, user.email);

    Ok(Json(message))
}

/**
 * Message Model and Log Operations
 *
 * This module handles the per-room message log. Each room's history is an
 * append-only sequence: messages are stored in arrival order and paginated
 * backwards from a `before` cursor.
 *
 * # Pagination
 *
 * `list` returns the most recent `limit` messages older than the cursor, in
 * chronological order. The default page size is 50 and the hard cap is 200;
 * a larger requested limit is clamped, never an error.
 */

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::store::rooms::RoomDirectory;

/// Page size used when the caller does not specify a limit
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Hard cap on requested page size
pub const MAX_PAGE_SIZE: usize = 200;

/// Message struct representing a single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID (UUID)
    pub id: uuid::Uuid,
    /// Room this message belongs to
    pub room_id: uuid::Uuid,
    /// Author's user ID
    pub user_id: uuid::Uuid,
    /// Message body
    pub content: String,
    /// Arrival timestamp
    pub timestamp: DateTime<Utc>,
}

/// In-memory append-only message log, one sequence per room
///
/// Holds a handle to the room directory so appends can reject messages for
/// rooms that do not exist. Reads of missing rooms are lenient and return
/// an empty page.
#[derive(Debug)]
pub struct MessageLog {
    rooms: Arc<RoomDirectory>,
    messages: RwLock<HashMap<uuid::Uuid, Vec<Message>>>,
}

impl MessageLog {
    /// Create an empty message log backed by the given room directory
    pub fn new(rooms: Arc<RoomDirectory>) -> Self {
        Self {
            rooms,
            messages: RwLock::new(HashMap::new()),
        }
    }

    /// Append a message to a room's log
    ///
    /// # Arguments
    /// * `room_id` - Target room
    /// * `user_id` - Author's user ID
    /// * `content` - Message body
    ///
    /// # Returns
    /// The stored message, or `Validation` if the content is empty or
    /// whitespace-only, or `NotFound` if the room does not exist
    pub async fn append(
        &self,
        room_id: uuid::Uuid,
        user_id: uuid::Uuid,
        content: String,
    ) -> Result<Message, ApiError> {
        if content.trim().is_empty() {
            return Err(ApiError::validation("content", "Message content is required"));
        }

        if !self.rooms.exists(room_id).await {
            return Err(ApiError::not_found("Room"));
        }

        let message = Message {
            id: uuid::Uuid::new_v4(),
            room_id,
            user_id,
            content,
            timestamp: Utc::now(),
        };

        let mut messages = self.messages.write().await;
        messages.entry(room_id).or_default().push(message.clone());

        Ok(message)
    }

    /// List messages from a room's log
    ///
    /// Returns the most recent `limit` messages strictly older than
    /// `before`, in chronological order. An unknown room yields an empty
    /// page rather than an error.
    ///
    /// # Arguments
    /// * `room_id` - Room to read from
    /// * `limit` - Page size (defaults to 50, capped at 200)
    /// * `before` - Exclusive upper bound on message timestamps
    pub async fn list(
        &self,
        room_id: uuid::Uuid,
        limit: Option<usize>,
        before: Option<DateTime<Utc>>,
    ) -> Vec<Message> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

        let messages = self.messages.read().await;
        let Some(log) = messages.get(&room_id) else {
            return Vec::new();
        };

        let eligible: Vec<&Message> = match before {
            Some(cursor) => log.iter().filter(|m| m.timestamp < cursor).collect(),
            None => log.iter().collect(),
        };

        let skip = eligible.len().saturating_sub(limit);
        eligible[skip..].iter().map(|m| (*m).clone()).collect()
    }

    /// Total number of messages stored for a room
    pub async fn len(&self, room_id: uuid::Uuid) -> usize {
        let messages = self.messages.read().await;
        messages.get(&room_id).map(Vec::len).unwrap_or(0)
    }
}

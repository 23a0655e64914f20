/**
 * Room Model and Directory Operations
 *
 * This module handles chat room data. Rooms are a flat namespace: any
 * authenticated user can create one, and every room is visible to every
 * user. Room names are not required to be unique.
 */

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::ApiError;

/// Room struct representing a chat room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room ID (UUID)
    pub id: uuid::Uuid,
    /// Room display name
    pub name: String,
    /// ID of the user who created the room
    pub created_by: uuid::Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// In-memory room directory
///
/// Keyed by room ID. Listing returns rooms ordered by creation time.
#[derive(Debug, Default)]
pub struct RoomDirectory {
    rooms: RwLock<HashMap<uuid::Uuid, Room>>,
}

impl RoomDirectory {
    /// Create an empty room directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new room
    ///
    /// # Arguments
    /// * `name` - Room display name
    /// * `created_by` - ID of the creating user
    ///
    /// # Returns
    /// Created room, or `Validation` if the name is empty or whitespace-only
    pub async fn create(&self, name: String, created_by: uuid::Uuid) -> Result<Room, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name", "Room name is required"));
        }

        let room = Room {
            id: uuid::Uuid::new_v4(),
            name,
            created_by,
            created_at: Utc::now(),
        };

        let mut rooms = self.rooms.write().await;
        rooms.insert(room.id, room.clone());

        tracing::info!("Room created: {} ({})", room.name, room.id);

        Ok(room)
    }

    /// List all rooms, oldest first
    pub async fn list(&self) -> Vec<Room> {
        let rooms = self.rooms.read().await;
        let mut all: Vec<Room> = rooms.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        all
    }

    /// Get room by ID
    ///
    /// # Arguments
    /// * `id` - Room ID
    ///
    /// # Returns
    /// Room or None if not found
    pub async fn get(&self, id: uuid::Uuid) -> Option<Room> {
        let rooms = self.rooms.read().await;
        rooms.get(&id).cloned()
    }

    /// Check whether a room exists
    pub async fn exists(&self, id: uuid::Uuid) -> bool {
        let rooms = self.rooms.read().await;
        rooms.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_create_and_get() {
        let directory = RoomDirectory::new();
        let creator = uuid::Uuid::new_v4();

        let room = directory
            .create("General".to_string(), creator)
            .await
            .unwrap();
        assert_eq!(room.name, "General");
        assert_eq!(room.created_by, creator);

        let fetched = directory.get(room.id).await.unwrap();
        assert_eq!(fetched.id, room.id);
        assert!(directory.exists(room.id).await);
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let directory = RoomDirectory::new();
        let creator = uuid::Uuid::new_v4();

        let result = directory.create(String::new(), creator).await;
        assert_matches!(result, Err(ApiError::Validation { field, .. }) if field == "name");

        let result = directory.create("   ".to_string(), creator).await;
        assert_matches!(result, Err(ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_names_allowed() {
        let directory = RoomDirectory::new();
        let creator = uuid::Uuid::new_v4();

        let first = directory
            .create("General".to_string(), creator)
            .await
            .unwrap();
        let second = directory
            .create("General".to_string(), creator)
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(directory.list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_list_ordered_by_creation() {
        let directory = RoomDirectory::new();
        let creator = uuid::Uuid::new_v4();

        let a = directory.create("a".to_string(), creator).await.unwrap();
        let b = directory.create("b".to_string(), creator).await.unwrap();
        let c = directory.create("c".to_string(), creator).await.unwrap();

        let listed = directory.list().await;
        let ids: Vec<uuid::Uuid> = listed.iter().map(|r| r.id).collect();
        assert!(ids.contains(&a.id) && ids.contains(&b.id) && ids.contains(&c.id));

        let timestamps: Vec<_> = listed.iter().map(|r| r.created_at).collect();
        let mut sorted = timestamps.clone();
        sorted.sort();
        assert_eq!(timestamps, sorted);
    }

    #[tokio::test]
    async fn test_get_unknown_room() {
        let directory = RoomDirectory::new();
        assert!(directory.get(uuid::Uuid::new_v4()).await.is_none());
        assert!(!directory.exists(uuid::Uuid::new_v4()).await);
    }
}

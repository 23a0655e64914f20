/**
 * Chat Submission Service
 *
 * This module owns the append-then-publish pair that both submission
 * surfaces (REST and WebSocket) go through. Holding a per-room lock across
 * the pair guarantees that subscribers observe a room's messages in the
 * same order the log stores them.
 */

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::ApiError;
use crate::realtime::events::ServerEvent;
use crate::realtime::hub::FanoutHub;
use crate::store::messages::{Message, MessageLog};

/// Coordinates message submission across the log and the fan-out hub
#[derive(Debug)]
pub struct ChatService {
    log: Arc<MessageLog>,
    hub: Arc<FanoutHub>,
    /// Per-room submission locks; entries are created on first use and
    /// never removed (rooms are never deleted)
    room_locks: Mutex<HashMap<uuid::Uuid, Arc<Mutex<()>>>>,
}

impl ChatService {
    /// Create a service over the given log and hub
    pub fn new(log: Arc<MessageLog>, hub: Arc<FanoutHub>) -> Self {
        Self {
            log,
            hub,
            room_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Append a message and fan it out to the room's subscribers
    ///
    /// The append and the publish happen under the room's submission lock,
    /// so two concurrent posts to the same room cannot interleave their
    /// log order with their delivery order.
    ///
    /// # Arguments
    /// * `room_id` - Target room
    /// * `user_id` - Author's user ID
    /// * `content` - Message body
    ///
    /// # Returns
    /// The stored message, or the log's `Validation`/`NotFound` error
    pub async fn post_message(
        &self,
        room_id: uuid::Uuid,
        user_id: uuid::Uuid,
        content: String,
    ) -> Result<Message, ApiError> {
        let room_lock = {
            let mut locks = self.room_locks.lock().await;
            locks
                .entry(room_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        let _guard = room_lock.lock().await;

        let message = self.log.append(room_id, user_id, content).await?;

        let delivered = self
            .hub
            .publish(
                room_id,
                ServerEvent::Delivered {
                    message: message.clone(),
                },
            )
            .await;

        tracing::debug!(
            "Message {} delivered to {} subscribers of room {}",
            message.id,
            delivered,
            room_id
        );

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::rooms::RoomDirectory;
    use assert_matches::assert_matches;
    use tokio::sync::mpsc;

    async fn service_with_room() -> (ChatService, Arc<FanoutHub>, uuid::Uuid, uuid::Uuid) {
        let rooms = Arc::new(RoomDirectory::new());
        let user_id = uuid::Uuid::new_v4();
        let room = rooms.create("test".to_string(), user_id).await.unwrap();
        let log = Arc::new(MessageLog::new(rooms));
        let hub = Arc::new(FanoutHub::new());
        (ChatService::new(log, hub.clone()), hub, room.id, user_id)
    }

    #[tokio::test]
    async fn test_post_appends_and_publishes() {
        let (service, hub, room_id, user_id) = service_with_room().await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let conn = hub.register(tx).await;
        hub.join(conn, room_id).await;

        let message = service
            .post_message(room_id, user_id, "hello".to_string())
            .await
            .unwrap();

        let event = rx.try_recv().unwrap();
        assert_matches!(event, ServerEvent::Delivered { message: delivered } => {
            assert_eq!(delivered.id, message.id);
            assert_eq!(delivered.content, "hello");
        });
    }

    #[tokio::test]
    async fn test_post_to_unknown_room_publishes_nothing() {
        let (service, hub, room_id, user_id) = service_with_room().await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let conn = hub.register(tx).await;
        hub.join(conn, room_id).await;

        let result = service
            .post_message(uuid::Uuid::new_v4(), user_id, "hello".to_string())
            .await;
        assert_matches!(result, Err(ApiError::NotFound(_)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_post_empty_content_publishes_nothing() {
        let (service, hub, room_id, user_id) = service_with_room().await;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let conn = hub.register(tx).await;
        hub.join(conn, room_id).await;

        let result = service
            .post_message(room_id, user_id, "   ".to_string())
            .await;
        assert_matches!(result, Err(ApiError::Validation { .. }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_concurrent_posts_delivered_in_log_order() {
        let (service, hub, room_id, user_id) = service_with_room().await;
        let service = Arc::new(service);

        let (tx, mut rx) = mpsc::unbounded_channel();
        let conn = hub.register(tx).await;
        hub.join(conn, room_id).await;

        let mut handles = Vec::new();
        for i in 0..20 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .post_message(room_id, user_id, format!("m{}", i))
                    .await
                    .unwrap()
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let mut delivered = Vec::new();
        while let Ok(event) = rx.try_recv() {
            let ServerEvent::Delivered { message } = event else {
                panic!("unexpected event");
            };
            delivered.push(message.content);
        }
        assert_eq!(delivered.len(), 20);

        // Delivery order must match the log's stored order
        let logged = service.log.list(room_id, Some(20), None).await;
        let logged: Vec<String> = logged.into_iter().map(|m| m.content).collect();
        assert_eq!(delivered, logged);
    }
}

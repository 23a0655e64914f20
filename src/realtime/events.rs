/**
 * Realtime Wire Events
 *
 * This module defines the JSON event types exchanged over a WebSocket
 * connection. Events are tagged by a `type` field in snake_case.
 *
 * # Client -> Server
 *
 * - `{"type": "join", "room_id": "..."}` - Subscribe to a room
 * - `{"type": "leave", "room_id": "..."}` - Unsubscribe from a room
 * - `{"type": "submit", "room_id": "...", "content": "..."}` - Post a message
 *
 * # Server -> Client
 *
 * - `{"type": "delivered", "message": {...}}` - A message reached a room
 *   this connection is subscribed to
 * - `{"type": "error", "message": "..."}` - A submission was rejected
 *   (only emitted under the `strict` submit policy)
 */

use serde::{Deserialize, Serialize};

use crate::store::messages::Message;

/// Events a client may send over the WebSocket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Subscribe this connection to a room
    Join { room_id: uuid::Uuid },
    /// Unsubscribe this connection from a room
    Leave { room_id: uuid::Uuid },
    /// Post a message to a room
    Submit { room_id: uuid::Uuid, content: String },
}

/// Events the server pushes to connected clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A message was appended to a subscribed room
    Delivered { message: Message },
    /// A submission failed (strict policy only)
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_client_event_join_roundtrip() {
        let room_id = uuid::Uuid::new_v4();
        let json = format!(r#"{{"type":"join","room_id":"{}"}}"#, room_id);

        let event: ClientEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, ClientEvent::Join { room_id });
    }

    #[test]
    fn test_client_event_submit() {
        let room_id = uuid::Uuid::new_v4();
        let json = format!(
            r#"{{"type":"submit","room_id":"{}","content":"hello"}}"#,
            room_id
        );

        let event: ClientEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(
            event,
            ClientEvent::Submit {
                room_id,
                content: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        let json = r#"{"type":"dance","room_id":"not-even-a-uuid"}"#;
        assert!(serde_json::from_str::<ClientEvent>(json).is_err());
    }

    #[test]
    fn test_server_event_delivered_shape() {
        let message = Message {
            id: uuid::Uuid::new_v4(),
            room_id: uuid::Uuid::new_v4(),
            user_id: uuid::Uuid::new_v4(),
            content: "hello".to_string(),
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(ServerEvent::Delivered { message: message.clone() }).unwrap();
        assert_eq!(json["type"], "delivered");
        assert_eq!(json["message"]["content"], "hello");
        assert_eq!(json["message"]["id"], message.id.to_string());
    }

    #[test]
    fn test_server_event_error_shape() {
        let json = serde_json::to_value(ServerEvent::Error {
            message: "Authentication required".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], "Authentication required");
    }
}

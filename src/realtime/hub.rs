/**
 * Realtime Fan-out Hub
 *
 * This module tracks live WebSocket connections and their room
 * subscriptions, and fans published events out to every subscriber of a
 * room.
 *
 * # Delivery Semantics
 *
 * Publishing is best-effort. Each connection has an unbounded channel to
 * its socket writer task; a send that fails means the receiver was dropped,
 * so the connection is reaped from the hub on the spot. Publish never
 * blocks on a slow client and never fails.
 *
 * # Subscription Semantics
 *
 * `join` and `leave` are idempotent: joining a room twice or leaving a room
 * the connection never joined are no-ops. Unregistering a connection
 * removes it from every room it had joined.
 */

use std::collections::{HashMap, HashSet};

use tokio::sync::{mpsc, RwLock};

use crate::realtime::events::ServerEvent;

/// Opaque identifier for a live connection
pub type ConnId = uuid::Uuid;

#[derive(Debug, Default)]
struct HubState {
    /// Room -> subscribed connections
    rooms: HashMap<uuid::Uuid, HashSet<ConnId>>,
    /// Connection -> channel to its socket writer
    connections: HashMap<ConnId, mpsc::UnboundedSender<ServerEvent>>,
    /// Connection -> rooms it has joined (for cleanup on unregister)
    memberships: HashMap<ConnId, HashSet<uuid::Uuid>>,
}

impl HubState {
    fn remove_connection(&mut self, conn_id: ConnId) {
        self.connections.remove(&conn_id);
        if let Some(joined) = self.memberships.remove(&conn_id) {
            for room_id in joined {
                if let Some(members) = self.rooms.get_mut(&room_id) {
                    members.remove(&conn_id);
                    if members.is_empty() {
                        self.rooms.remove(&room_id);
                    }
                }
            }
        }
    }
}

/// Connection and subscription registry with room-scoped fan-out
#[derive(Debug, Default)]
pub struct FanoutHub {
    state: RwLock<HubState>,
}

impl FanoutHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new connection
    ///
    /// # Arguments
    /// * `sender` - Channel feeding the connection's socket writer
    ///
    /// # Returns
    /// Identifier for the new connection
    pub async fn register(&self, sender: mpsc::UnboundedSender<ServerEvent>) -> ConnId {
        let conn_id = uuid::Uuid::new_v4();
        let mut state = self.state.write().await;
        state.connections.insert(conn_id, sender);
        state.memberships.insert(conn_id, HashSet::new());
        tracing::debug!("Connection registered: {}", conn_id);
        conn_id
    }

    /// Remove a connection and all of its subscriptions
    ///
    /// Idempotent: unregistering an unknown connection is a no-op.
    pub async fn unregister(&self, conn_id: ConnId) {
        let mut state = self.state.write().await;
        state.remove_connection(conn_id);
        tracing::debug!("Connection unregistered: {}", conn_id);
    }

    /// Subscribe a connection to a room (idempotent)
    pub async fn join(&self, conn_id: ConnId, room_id: uuid::Uuid) {
        let mut state = self.state.write().await;
        if !state.connections.contains_key(&conn_id) {
            return;
        }
        state.rooms.entry(room_id).or_default().insert(conn_id);
        state
            .memberships
            .entry(conn_id)
            .or_default()
            .insert(room_id);
    }

    /// Unsubscribe a connection from a room (idempotent)
    pub async fn leave(&self, conn_id: ConnId, room_id: uuid::Uuid) {
        let mut state = self.state.write().await;
        if let Some(members) = state.rooms.get_mut(&room_id) {
            members.remove(&conn_id);
            if members.is_empty() {
                state.rooms.remove(&room_id);
            }
        }
        if let Some(joined) = state.memberships.get_mut(&conn_id) {
            joined.remove(&room_id);
        }
    }

    /// Publish an event to every subscriber of a room
    ///
    /// Connections whose channel is closed are reaped during the pass.
    ///
    /// # Returns
    /// Number of connections the event was handed to
    pub async fn publish(&self, room_id: uuid::Uuid, event: ServerEvent) -> usize {
        let mut state = self.state.write().await;

        let Some(members) = state.rooms.get(&room_id) else {
            return 0;
        };

        let mut delivered = 0;
        let mut dead: Vec<ConnId> = Vec::new();

        for conn_id in members.iter().copied().collect::<Vec<_>>() {
            match state.connections.get(&conn_id) {
                Some(sender) if sender.send(event.clone()).is_ok() => delivered += 1,
                _ => dead.push(conn_id),
            }
        }

        for conn_id in dead {
            tracing::debug!("Reaping dead connection: {}", conn_id);
            state.remove_connection(conn_id);
        }

        delivered
    }

    /// Send an event to a single connection
    ///
    /// Used for per-connection error replies. Best-effort like `publish`.
    pub async fn send_to(&self, conn_id: ConnId, event: ServerEvent) {
        let mut state = self.state.write().await;
        let dead = match state.connections.get(&conn_id) {
            Some(sender) => sender.send(event).is_err(),
            None => false,
        };
        if dead {
            state.remove_connection(conn_id);
        }
    }

    /// Number of connections currently subscribed to a room
    pub async fn subscriber_count(&self, room_id: uuid::Uuid) -> usize {
        let state = self.state.read().await;
        state.rooms.get(&room_id).map(HashSet::len).unwrap_or(0)
    }
}

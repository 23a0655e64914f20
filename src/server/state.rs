/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` conversions for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is the central state container, holding:
 * - Server configuration
 * - The user store, room directory, and message log
 * - The realtime fan-out hub
 * - The chat submission service
 *
 * # Thread Safety
 *
 * All components are shared behind `Arc` and guard their interior state
 * with async locks, so `AppState` is cheap to clone and safe to hand to
 * every request handler.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the component
 * they need (e.g. `State<Arc<UserStore>>`) instead of the whole state.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::chat::service::ChatService;
use crate::realtime::hub::FanoutHub;
use crate::server::config::ServerConfig;
use crate::store::messages::MessageLog;
use crate::store::rooms::RoomDirectory;
use crate::store::users::UserStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration loaded at startup
    pub config: ServerConfig,
    /// Registered users
    pub users: Arc<UserStore>,
    /// Room directory
    pub rooms: Arc<RoomDirectory>,
    /// Per-room message logs
    pub messages: Arc<MessageLog>,
    /// Realtime fan-out hub
    pub hub: Arc<FanoutHub>,
    /// Chat submission service (append + publish)
    pub chat: Arc<ChatService>,
}

impl FromRef<AppState> for Arc<UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<RoomDirectory> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.rooms.clone()
    }
}

impl FromRef<AppState> for Arc<MessageLog> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.messages.clone()
    }
}

impl FromRef<AppState> for Arc<FanoutHub> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hub.clone()
    }
}

impl FromRef<AppState> for Arc<ChatService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.chat.clone()
    }
}

impl FromRef<AppState> for ServerConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

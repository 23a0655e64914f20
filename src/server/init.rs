/**
 * Server Initialization
 *
 * This module handles initialization of the Axum application: building the
 * shared state, seeding demo data, and configuring the router.
 *
 * # Initialization Process
 *
 * 1. Build the stores, hub, and chat service
 * 2. Seed the demo account and the "General" room
 * 3. Create and configure the router
 *
 * # Seed Data
 *
 * A fresh server is immediately usable: it starts with one demo user
 * (`demo@example.com`) and one room named "General". The demo user's
 * password is a random value that is hashed and discarded, so the account
 * can never be logged into.
 */

use std::sync::Arc;

use axum::Router;

use crate::auth::password::hash_password;
use crate::chat::service::ChatService;
use crate::realtime::hub::FanoutHub;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;
use crate::store::messages::MessageLog;
use crate::store::rooms::RoomDirectory;
use crate::store::users::UserStore;

/// Build the application state with empty stores
pub fn build_state(config: ServerConfig) -> AppState {
    let users = Arc::new(UserStore::new());
    let rooms = Arc::new(RoomDirectory::new());
    let messages = Arc::new(MessageLog::new(rooms.clone()));
    let hub = Arc::new(FanoutHub::new());
    let chat = Arc::new(ChatService::new(messages.clone(), hub.clone()));

    AppState {
        config,
        users,
        rooms,
        messages,
        hub,
        chat,
    }
}

/// Seed the demo user and the "General" room
///
/// Failures here are logged and skipped; an unseeded server is degraded,
/// not broken.
pub async fn seed_demo_data(state: &AppState) {
    let discarded_password = uuid::Uuid::new_v4().to_string();
    let password_hash = match hash_password(&discarded_password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash seed password: {}", e);
            return;
        }
    };

    let demo_user = match state
        .users
        .create("demo@example.com".to_string(), password_hash)
        .await
    {
        Ok(user) => user,
        Err(e) => {
            tracing::error!("Failed to seed demo user: {}", e);
            return;
        }
    };

    match state
        .rooms
        .create("General".to_string(), demo_user.id)
        .await
    {
        Ok(room) => tracing::info!("Seeded demo user and room 'General' ({})", room.id),
        Err(e) => tracing::error!("Failed to seed General room: {}", e),
    }
}

/// Create and configure the Axum application
///
/// Builds the state, seeds demo data, and returns the configured router.
pub async fn create_app(config: ServerConfig) -> Router {
    let state = build_state(config);
    seed_demo_data(&state).await;
    create_router(state)
}

/// Fresh unseeded state for unit tests
#[cfg(test)]
pub fn test_state() -> AppState {
    build_state(ServerConfig::default())
}

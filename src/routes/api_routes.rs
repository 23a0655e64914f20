/**
 * API Route Tables
 *
 * This module defines the route tables for the REST and WebSocket
 * endpoints, split by authentication requirement.
 *
 * # Routes
 *
 * ## Public
 * - `POST /auth/signup` - User registration
 * - `POST /auth/login` - User login
 * - `GET /ws` - WebSocket upgrade (token optional, via `?token=`)
 *
 * ## Protected (bearer token required)
 * - `GET /auth/me` - Get current user info
 * - `PUT /users/me/push-token` - Register device push token
 * - `GET /rooms` / `POST /rooms` - List and create rooms
 * - `GET /rooms/{room_id}` - Room detail with recent messages
 * - `GET /rooms/{room_id}/messages` - Paginated history
 * - `POST /rooms/{room_id}/messages` - Submit a message
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::auth::handlers::{get_me, login, signup, update_push_token};
use crate::chat::handlers::{create_room, get_room, list_messages, list_rooms, post_message};
use crate::middleware::auth::auth_middleware;
use crate::realtime::ws::ws_handler;
use crate::server::state::AppState;

/// Routes reachable without a credential
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/ws", get(ws_handler))
}

/// Routes guarded by the auth middleware
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(get_me))
        .route("/users/me/push-token", put(update_push_token))
        .route("/rooms", get(list_rooms).post(create_room))
        .route("/rooms/{room_id}", get(get_room))
        .route(
            "/rooms/{room_id}/messages",
            get(list_messages).post(post_message),
        )
        .route_layer(middleware::from_fn(auth_middleware))
}

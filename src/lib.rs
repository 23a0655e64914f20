//! ChatRelay - Main Library
//!
//! ChatRelay is a realtime chat server built with Rust: JWT-authenticated
//! REST endpoints for identity, rooms, and message history, plus a
//! WebSocket fan-out path that delivers every accepted message to the
//! room's live subscribers.
//!
//! # Module Structure
//!
//! - **`auth`** - Identity: signup/login handlers, JWT tokens, bcrypt
//!   password hashing
//! - **`store`** - In-memory state: users, rooms, per-room message logs
//! - **`realtime`** - WebSocket gateway and the fan-out hub
//! - **`chat`** - The submission service (append + publish) and the
//!   room/message REST handlers
//! - **`middleware`** - Bearer-token auth middleware and extractor
//! - **`routes`** - Route tables and router assembly
//! - **`server`** - Configuration, shared state, initialization
//! - **`error`** - The `ApiError` taxonomy and HTTP conversions
//!
//! # Usage
//!
//! ```rust,no_run
//! use chatrelay::server::config::ServerConfig;
//! use chatrelay::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app(ServerConfig::from_env()).await;
//! // Use app with axum::serve
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All server state is shared behind `Arc` with `tokio::sync` locks; the
//! state handle is cheap to clone into every request handler and
//! WebSocket task.

/// Identity and token service
pub mod auth;

/// Chat submission service and REST handlers
pub mod chat;

/// Error taxonomy and HTTP conversions
pub mod error;

/// Auth middleware and extractor
pub mod middleware;

/// WebSocket gateway and fan-out hub
pub mod realtime;

/// Route tables and router assembly
pub mod routes;

/// Configuration, state, and initialization
pub mod server;

/// In-memory data stores
pub mod store;

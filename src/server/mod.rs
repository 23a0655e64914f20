/**
 * Server Assembly
 *
 * This module wires configuration, shared state, and initialization for
 * the HTTP server.
 */

pub mod config;
pub mod init;
pub mod state;

pub use config::{ServerConfig, SubmitPolicy};
pub use state::AppState;

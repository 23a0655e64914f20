/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables, with
 * sensible defaults for local development.
 *
 * # Configuration Sources
 *
 * - `SERVER_PORT` - TCP port to listen on (default 3000)
 * - `WS_SUBMIT_POLICY` - What an unauthorized or invalid WebSocket submit
 *   gets back: `silent` (dropped without feedback, the default) or
 *   `strict` (an `error` event on the offending connection)
 * - `JWT_SECRET` - Read separately by the token module
 *
 * # Error Handling
 *
 * Configuration errors are logged but never prevent startup; an
 * unparseable value falls back to its default.
 */

/// Policy for rejected WebSocket submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Drop the submission without telling the client
    Silent,
    /// Send an `error` event back on the same connection
    Strict,
}

impl SubmitPolicy {
    /// Parse a policy name; unrecognized values return None
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "silent" => Some(Self::Silent),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }
}

/// Server configuration loaded at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on
    pub port: u16,
    /// Policy for rejected WebSocket submissions
    pub ws_submit_policy: SubmitPolicy,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// Missing or malformed values fall back to defaults with a warning.
    pub fn from_env() -> Self {
        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!("Unparseable SERVER_PORT '{}', using 3000", value);
                3000
            }),
            Err(_) => 3000,
        };

        let ws_submit_policy = match std::env::var("WS_SUBMIT_POLICY") {
            Ok(value) => SubmitPolicy::parse(&value).unwrap_or_else(|| {
                tracing::warn!("Unrecognized WS_SUBMIT_POLICY '{}', using silent", value);
                SubmitPolicy::Silent
            }),
            Err(_) => SubmitPolicy::Silent,
        };

        Self {
            port,
            ws_submit_policy,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            ws_submit_policy: SubmitPolicy::Silent,
        }
    }
}

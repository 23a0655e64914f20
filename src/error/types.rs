/**
 * API Error Types
 *
 * This module defines the error taxonomy for the chat server. Every domain
 * failure that can reach a caller is one of these variants, and each maps
 * to a distinguishing HTTP status.
 *
 * # Error Categories
 *
 * - `Validation` - Missing or empty required field (user-correctable)
 * - `Unauthorized` - Missing/invalid/expired credential, or bad login
 * - `NotFound` - Referenced room does not exist
 * - `AlreadyExists` - Duplicate email on signup
 * - `Internal` - Unexpected server-side failure
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the request/submission gateway
///
/// The WebSocket submission path swallows these under the `silent` policy;
/// the REST path always converts them to an HTTP response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or empty required field
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Missing, invalid, or expired credential, or a failed login
    #[error("{0}")]
    Unauthorized(String),

    /// A referenced resource does not exist
    #[error("{0} not found")]
    NotFound(String),

    /// A uniqueness constraint was violated
    #[error("{0}")]
    AlreadyExists(String),

    /// Unexpected server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create a new not-found error for the named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// Create a new already-exists error
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::AlreadyExists(message.into())
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `AlreadyExists` - 409 Conflict
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

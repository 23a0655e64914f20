/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require user
 * authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the caller's identity to handlers.
 *
 * Credential validity is stateless: a token is accepted iff its signature
 * verifies and it has not expired. Handlers that need the backing user
 * record look it up themselves.
 */

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::verify_token;
use crate::error::ApiError;

/// Authenticated caller identity extracted from a JWT token
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// Authenticated user's ID
    pub user_id: Uuid,
    /// Authenticated user's email
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies the token
/// 3. Extracts the user ID from the token claims
/// 4. Attaches the identity to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Missing Authorization header")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthorized("Invalid Authorization header format")
    })?;

    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        ApiError::unauthorized("Invalid or expired token")
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!("Invalid user ID in token: {}", e);
        ApiError::unauthorized("Invalid or expired token")
    })?;

    request.extensions_mut().insert(AuthUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AuthUser>().cloned().ok_or_else(|| {
            tracing::warn!("AuthUser not found in request extensions");
            ApiError::unauthorized("Authentication required")
        })
    }
}

/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /auth/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * This endpoint requires a valid JWT token in the `Authorization` header.
 * The auth middleware verifies the token and exposes the caller's identity
 * through the `AuthUser` extractor.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::UserResponse;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::store::users::UserStore;

/// Get current user handler
///
/// Returns the authenticated user's profile without sensitive data.
///
/// # Arguments
///
/// * `State(users)` - User store
/// * `user` - Authenticated identity from the auth middleware
///
/// # Returns
///
/// JSON response with user info, or an `ApiError`
///
/// # Errors
///
/// * `401 Unauthorized` - If the Authorization header is missing or invalid
/// * `404 Not Found` - If the token's user no longer exists
pub async fn get_me(
    State(users): State<Arc<UserStore>>,
    user: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users
        .find_by_id(user.user_id)
        .await
        .ok_or_else(|| ApiError::not_found("User"))?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_get_me_returns_profile() {
        let users = Arc::new(UserStore::new());
        let hash = hash_password("password123").unwrap();
        let created = users
            .create("me@example.com".to_string(), hash)
            .await
            .unwrap();

        let identity = AuthUser {
            user_id: created.id,
            email: created.email.clone(),
        };

        let Json(response) = get_me(State(users), identity).await.unwrap();
        assert_eq!(response.id, created.id.to_string());
        assert_eq!(response.email, "me@example.com");
    }

    #[tokio::test]
    async fn test_get_me_unknown_user() {
        let users = Arc::new(UserStore::new());
        let identity = AuthUser {
            user_id: uuid::Uuid::new_v4(),
            email: "ghost@example.com".to_string(),
        };

        let result = get_me(State(users), identity).await;
        assert_matches!(result, Err(ApiError::NotFound(_)));
    }
}

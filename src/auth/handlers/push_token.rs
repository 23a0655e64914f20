/**
 * Push Token Handler
 *
 * This module implements the handler for PUT /users/me/push-token, which
 * associates a device push notification token with the authenticated user.
 * The token is stored verbatim; delivery to a push gateway happens out of
 * band.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{PushTokenRequest, UserResponse};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::store::users::UserStore;

/// Update push token handler
///
/// Stores the supplied device token on the authenticated user, replacing any
/// previously registered token.
///
/// # Arguments
///
/// * `State(users)` - User store
/// * `user` - Authenticated identity from the auth middleware
/// * `Json(request)` - Request containing the device token
///
/// # Returns
///
/// JSON response with the updated user info, or an `ApiError`
///
/// # Errors
///
/// * `400 Bad Request` - If the token field is missing or empty
/// * `401 Unauthorized` - If the Authorization header is missing or invalid
/// * `404 Not Found` - If the token's user no longer exists
pub async fn update_push_token(
    State(users): State<Arc<UserStore>>,
    user: AuthUser,
    Json(request): Json<PushTokenRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if request.token.trim().is_empty() {
        return Err(ApiError::validation("token", "Push token is required"));
    }

    let updated = users.update_push_token(user.user_id, request.token).await?;

    tracing::info!("Push token updated for user: {}", updated.email);

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_update_push_token() {
        let users = Arc::new(UserStore::new());
        let hash = hash_password("password123").unwrap();
        let created = users
            .create("push@example.com".to_string(), hash)
            .await
            .unwrap();

        let identity = AuthUser {
            user_id: created.id,
            email: created.email.clone(),
        };

        let request = PushTokenRequest {
            token: "fcm-token-abc123".to_string(),
        };

        let Json(response) = update_push_token(State(users.clone()), identity, Json(request))
            .await
            .unwrap();
        assert_eq!(response.push_token.as_deref(), Some("fcm-token-abc123"));

        let stored = users.find_by_id(created.id).await.unwrap();
        assert_eq!(stored.push_token.as_deref(), Some("fcm-token-abc123"));
    }

    #[tokio::test]
    async fn test_update_push_token_replaces_previous() {
        let users = Arc::new(UserStore::new());
        let hash = hash_password("password123").unwrap();
        let created = users
            .create("push@example.com".to_string(), hash)
            .await
            .unwrap();

        let identity = AuthUser {
            user_id: created.id,
            email: created.email.clone(),
        };

        update_push_token(
            State(users.clone()),
            identity.clone(),
            Json(PushTokenRequest {
                token: "first-token".to_string(),
            }),
        )
        .await
        .unwrap();

        let Json(response) = update_push_token(
            State(users),
            identity,
            Json(PushTokenRequest {
                token: "second-token".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.push_token.as_deref(), Some("second-token"));
    }

    #[tokio::test]
    async fn test_update_push_token_empty() {
        let users = Arc::new(UserStore::new());
        let identity = AuthUser {
            user_id: uuid::Uuid::new_v4(),
            email: "push@example.com".to_string(),
        };

        let request = PushTokenRequest {
            token: "  ".to_string(),
        };

        let result = update_push_token(State(users), identity, Json(request)).await;
        assert_matches!(result, Err(ApiError::Validation { field, .. }) if field == "token");
    }

    #[tokio::test]
    async fn test_update_push_token_unknown_user() {
        let users = Arc::new(UserStore::new());
        let identity = AuthUser {
            user_id: uuid::Uuid::new_v4(),
            email: "ghost@example.com".to_string(),
        };

        let request = PushTokenRequest {
            token: "fcm-token".to_string(),
        };

        let result = update_push_token(State(users), identity, Json(request)).await;
        assert_matches!(result, Err(ApiError::NotFound(_)));
    }
}

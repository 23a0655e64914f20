/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate that email and password are present
 * 2. Hash password using bcrypt
 * 3. Create user in the store (rejects duplicate emails)
 * 4. Generate JWT token
 * 5. Return token and user info
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 * - JWT tokens are generated with 7-day expiration
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::auth::password::hash_password;
use crate::auth::tokens::create_token;
use crate::error::ApiError;
use crate::store::users::UserStore;

/// Sign up handler
///
/// This handler processes user registration requests. It validates the input,
/// creates a new user account, and returns a JWT token for immediate
/// authentication.
///
/// # Arguments
///
/// * `State(users)` - User store
/// * `Json(request)` - Signup request containing email and password
///
/// # Returns
///
/// JSON response with JWT token and user info, or an `ApiError`
///
/// # Errors
///
/// * `400 Bad Request` - If email or password is missing or empty
/// * `409 Conflict` - If a user with this email already exists
/// * `500 Internal Server Error` - If password hashing or token generation fails
pub async fn signup(
    State(users): State<Arc<UserStore>>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Signup request for email: {}", request.email);

    if request.email.trim().is_empty() {
        tracing::warn!("Signup rejected: missing email");
        return Err(ApiError::validation("email", "Email is required"));
    }

    if request.password.is_empty() {
        tracing::warn!("Signup rejected: missing password");
        return Err(ApiError::validation("password", "Password is required"));
    }

    let password_hash = hash_password(&request.password)?;

    let user = users.create(request.email, password_hash).await?;

    let token = create_token(user.id, user.email.clone())?;

    tracing::info!("User created successfully: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn store() -> Arc<UserStore> {
        Arc::new(UserStore::new())
    }

    #[tokio::test]
    async fn test_signup_success() {
        let users = store();
        let request = SignupRequest {
            email: "newuser@example.com".to_string(),
            password: "password123".to_string(),
        };

        let Json(response) = signup(State(users), Json(request)).await.unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "newuser@example.com");
        assert!(response.user.push_token.is_none());
    }

    #[tokio::test]
    async fn test_signup_empty_email() {
        let users = store();
        let request = SignupRequest {
            email: "   ".to_string(),
            password: "password123".to_string(),
        };

        let result = signup(State(users), Json(request)).await;
        assert_matches!(result, Err(ApiError::Validation { field, .. }) if field == "email");
    }

    #[tokio::test]
    async fn test_signup_empty_password() {
        let users = store();
        let request = SignupRequest {
            email: "user@example.com".to_string(),
            password: String::new(),
        };

        let result = signup(State(users), Json(request)).await;
        assert_matches!(result, Err(ApiError::Validation { field, .. }) if field == "password");
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let users = store();

        let first = SignupRequest {
            email: "duplicate@example.com".to_string(),
            password: "password123".to_string(),
        };
        signup(State(users.clone()), Json(first)).await.unwrap();

        let second = SignupRequest {
            email: "duplicate@example.com".to_string(),
            password: "different456".to_string(),
        };
        let result = signup(State(users), Json(second)).await;
        assert_matches!(result, Err(ApiError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_case_insensitive() {
        let users = store();

        let first = SignupRequest {
            email: "casefold@example.com".to_string(),
            password: "password123".to_string(),
        };
        signup(State(users.clone()), Json(first)).await.unwrap();

        let second = SignupRequest {
            email: "CaseFold@Example.COM".to_string(),
            password: "password123".to_string(),
        };
        let result = signup(State(users), Json(second)).await;
        assert_matches!(result, Err(ApiError::AlreadyExists(_)));
    }
}

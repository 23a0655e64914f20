/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate that email and password are present
 * 2. Look up the user by email
 * 3. Verify password against stored bcrypt hash
 * 4. Generate JWT token
 * 5. Return token and user info
 *
 * # Security
 *
 * Unknown email and wrong password both return the same 401 message, so a
 * caller cannot probe which addresses have accounts.
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::password::verify_password;
use crate::auth::tokens::create_token;
use crate::error::ApiError;
use crate::store::users::UserStore;

/// Login handler
///
/// This handler processes user authentication requests. It verifies the
/// credentials and returns a JWT token on success.
///
/// # Arguments
///
/// * `State(users)` - User store
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// JSON response with JWT token and user info, or an `ApiError`
///
/// # Errors
///
/// * `400 Bad Request` - If email or password is missing or empty
/// * `401 Unauthorized` - If the email is unknown or the password is wrong
/// * `500 Internal Server Error` - If password verification or token generation fails
pub async fn login(
    State(users): State<Arc<UserStore>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for email: {}", request.email);

    if request.email.trim().is_empty() {
        return Err(ApiError::validation("email", "Email is required"));
    }

    if request.password.is_empty() {
        return Err(ApiError::validation("password", "Password is required"));
    }

    let user = users.find_by_email(&request.email).await.ok_or_else(|| {
        tracing::warn!("Login failed: unknown email: {}", request.email);
        ApiError::unauthorized("Invalid email or password")
    })?;

    let password_valid = verify_password(&request.password, &user.password_hash)?;
    if !password_valid {
        tracing::warn!("Login failed: wrong password for: {}", user.email);
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let token = create_token(user.id, user.email.clone())?;

    tracing::info!("Login successful: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

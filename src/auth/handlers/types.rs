/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. These types are shared across signup, login,
 * get_me, and push-token handlers.
 */

use serde::{Deserialize, Serialize};

use crate::store::users::User;

/// Sign up request
///
/// Contains the email and password for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
}

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Push token update request
///
/// Contains the device push token to associate with the current user.
#[derive(Deserialize, Serialize, Debug)]
pub struct PushTokenRequest {
    /// Device push notification token
    pub token: String,
}

/// Auth response
///
/// Returned by signup and login handlers. Contains the JWT token
/// and user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication (7-day expiration)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's email address
    pub email: String,
    /// Device push notification token, if one has been registered
    pub push_token: Option<String>,
    /// Account creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            push_token: user.push_token,
            created_at: user.created_at,
        }
    }
}

/**
 * User Model and Store Operations
 *
 * This module handles user data and in-memory store operations. Email
 * addresses are unique identifiers: lookups and the signup duplicate check
 * are case-insensitive, but the address is stored as the user typed it.
 */

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::ApiError;

/// User struct representing a registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Device push notification token (optional)
    pub push_token: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// In-memory user store
///
/// Keyed by user ID. All access goes through the async `RwLock`, so reads
/// may proceed concurrently while writes are exclusive.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<uuid::Uuid, User>>,
}

impl UserStore {
    /// Create an empty user store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user
    ///
    /// # Arguments
    /// * `email` - User email (stored as given)
    /// * `password_hash` - Bcrypt hash of the user's password
    ///
    /// # Returns
    /// Created user, or `AlreadyExists` if the email is taken
    /// (case-insensitive)
    pub async fn create(&self, email: String, password_hash: String) -> Result<User, ApiError> {
        let mut users = self.users.write().await;

        let lowered = email.to_lowercase();
        if users.values().any(|u| u.email.to_lowercase() == lowered) {
            return Err(ApiError::already_exists("Email already registered"));
        }

        let user = User {
            id: uuid::Uuid::new_v4(),
            email,
            password_hash,
            push_token: None,
            created_at: Utc::now(),
        };

        users.insert(user.id, user.clone());
        Ok(user)
    }

    /// Get user by email (case-insensitive)
    ///
    /// # Arguments
    /// * `email` - User email
    ///
    /// # Returns
    /// User or None if not found
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let lowered = email.to_lowercase();
        let users = self.users.read().await;
        users
            .values()
            .find(|u| u.email.to_lowercase() == lowered)
            .cloned()
    }

    /// Get user by ID
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// User or None if not found
    pub async fn find_by_id(&self, id: uuid::Uuid) -> Option<User> {
        let users = self.users.read().await;
        users.get(&id).cloned()
    }

    /// Update a user's push notification token
    ///
    /// Replaces any previously stored token.
    ///
    /// # Arguments
    /// * `user_id` - User ID
    /// * `token` - Device push token
    ///
    /// # Returns
    /// Updated user, or `NotFound` if the user does not exist
    pub async fn update_push_token(
        &self,
        user_id: uuid::Uuid,
        token: String,
    ) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| ApiError::not_found("User"))?;
        user.push_token = Some(token);
        Ok(user.clone())
    }
}

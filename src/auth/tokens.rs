/**
 * Credential Issuance and Verification
 *
 * This module handles JWT token generation and validation. Tokens are the
 * only credential in the system: an opaque, signed, time-limited assertion
 * of a user's identity with no server-side session state.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token validity window in seconds (7 days)
const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get JWT secret from environment
fn get_jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|err| {
        eprintln!("Missing JWT_SECRET. Error: {}", err);
        "dev-secret-change-in-production".to_string()
    })
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `user_id` - User ID (UUID)
/// * `email` - User email
///
/// # Returns
/// JWT token string, valid for 7 days
pub fn create_token(
    user_id: uuid::Uuid,
    email: String,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        email,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let secret = get_jwt_secret();
    let key = EncodingKey::from_secret(secret.as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a JWT token
///
/// Fails if the token is malformed, signature-invalid, or expired. Never
/// panics for any input; callers get a structured result either way.
///
/// # Arguments
/// * `token` - JWT token string
///
/// # Returns
/// Decoded claims or error
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = get_jwt_secret();
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

/// Extract user ID from token
///
/// # Arguments
/// * `token` - JWT token string
///
/// # Returns
/// User ID (UUID) or error
pub fn get_user_id_from_token(token: &str) -> Result<uuid::Uuid, String> {
    let claims =
        verify_token(token).map_err(|e| format!("Token verification failed: {}", e))?;
    uuid::Uuid::parse_str(&claims.sub).map_err(|e| format!("Invalid user ID in token: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_token() {
        let user_id = uuid::Uuid::new_v4();
        let email = "test@example.com".to_string();
        let result = create_token(user_id, email);
        assert!(result.is_ok());
        assert!(!result.unwrap().is_empty());
    }

    #[test]
    fn test_verify_token() {
        let user_id = uuid::Uuid::new_v4();
        let email = "test@example.com".to_string();
        let token = create_token(user_id, email.clone()).unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.email, email);
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[test]
    fn test_get_user_id_from_token() {
        let user_id = uuid::Uuid::new_v4();
        let token = create_token(user_id, "test@example.com".to_string()).unwrap();

        let result = get_user_id_from_token(&token);
        assert_eq!(result.unwrap(), user_id);
    }

    #[test]
    fn test_verify_malformed_token() {
        assert!(verify_token("invalid.token.here").is_err());
        assert!(verify_token("").is_err());
    }

    #[test]
    fn test_verify_tampered_token() {
        let user_id = uuid::Uuid::new_v4();
        let token = create_token(user_id, "test@example.com".to_string()).unwrap();

        // Flip a character in the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'a' { 'b' } else { 'a' });

        assert!(verify_token(&tampered).is_err());
    }

    #[test]
    fn test_token_validity_window() {
        let user_id = uuid::Uuid::new_v4();
        let token = create_token(user_id, "test@example.com".to_string()).unwrap();

        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }
}

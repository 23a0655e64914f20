/**
 * Password Hashing
 *
 * This module wraps bcrypt for password storage and verification. Plaintext
 * passwords never leave this module's callers: they are hashed on signup and
 * compared against the stored hash on login.
 */

use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plaintext password with bcrypt
///
/// # Arguments
/// * `password` - Plaintext password
///
/// # Returns
/// Bcrypt hash string, or error if hashing fails
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash
///
/// # Arguments
/// * `password` - Plaintext password to check
/// * `password_hash` - Stored bcrypt hash
///
/// # Returns
/// `true` if the password matches, `false` otherwise
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, password_hash)
}

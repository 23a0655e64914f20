/**
 * Identity and Token Service
 *
 * This module handles user identity for the chat server: registration,
 * login, JWT issuance and verification, and password hashing.
 *
 * # Submodules
 *
 * - `tokens` - JWT creation and verification
 * - `password` - Bcrypt password hashing
 * - `handlers` - HTTP handlers for the identity endpoints
 */

pub mod handlers;
pub mod password;
pub mod tokens;

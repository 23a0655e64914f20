/**
 * HTTP Middleware
 *
 * This module contains middleware applied to protected routes.
 */

pub mod auth;

pub use auth::{auth_middleware, AuthUser};

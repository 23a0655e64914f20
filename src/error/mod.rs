/**
 * Error Handling
 *
 * This module defines the error taxonomy surfaced by the HTTP gateway and
 * the conversions that turn domain failures into HTTP responses.
 */

pub mod conversion;
pub mod types;

pub use types::ApiError;

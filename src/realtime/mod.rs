/**
 * Realtime Fan-out
 *
 * This module delivers live message events to connected WebSocket clients.
 *
 * # Submodules
 *
 * - `events` - Wire event types for the WebSocket protocol
 * - `hub` - Connection registry and room-scoped fan-out
 * - `ws` - The WebSocket endpoint and per-connection loop
 */

pub mod events;
pub mod hub;
pub mod ws;

pub use events::{ClientEvent, ServerEvent};
pub use hub::{ConnId, FanoutHub};

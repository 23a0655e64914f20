/**
 * In-Memory Data Stores
 *
 * This module holds the server's state: users, rooms, and per-room message
 * logs. Everything lives in process memory behind async locks; restarting
 * the server starts from a clean slate (plus seed data).
 */

pub mod messages;
pub mod rooms;
pub mod users;

pub use messages::{Message, MessageLog};
pub use rooms::{Room, RoomDirectory};
pub use users::{User, UserStore};

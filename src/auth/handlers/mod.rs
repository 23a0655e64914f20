//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for identity endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Request and response types
//! ├── signup.rs     - User registration handler
//! ├── login.rs      - User authentication handler
//! ├── me.rs         - Get current user handler
//! └── push_token.rs - Push token registration handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /auth/signup - User registration
//! - **`login`** - POST /auth/login - User authentication
//! - **`get_me`** - GET /auth/me - Get current user info
//! - **`update_push_token`** - PUT /users/me/push-token - Register device token
//!
//! # Authentication Flow
//!
//! 1. **Signup**: User provides email and password → User created → JWT token returned
//! 2. **Login**: User provides email and password → Credentials verified → JWT token returned
//! 3. **Get Me**: User provides JWT token → Token verified → User info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after 7 days
//! - Invalid credentials return 401 (no information leakage)

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Push token registration handler
pub mod push_token;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, PushTokenRequest, SignupRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::get_me;
pub use push_token::update_push_token;
pub use signup::signup;

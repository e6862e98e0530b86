//! Authentication Module
//!
//! User accounts, password checks and JWT cookie sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - JWT issue/verify with fixed lifetimes
//! ├── cookies.rs      - HTTP-only session cookies
//! ├── settings.rs     - Keys and knobs built from AppConfig
//! └── handlers/       - HTTP handlers
//!     ├── signup.rs
//!     ├── login.rs
//!     ├── logout.rs
//!     ├── refresh.rs
//!     └── me.rs
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup / Login**: credentials checked → access + refresh tokens
//!    issued → both set as cookies, access token also returned in the body
//! 2. **Authenticated request**: bearer header or `access_token` cookie
//!    verified by `middleware::auth::require_auth`
//! 3. **Refresh**: `refresh_token` cookie verified → new pair issued
//! 4. **Logout**: both cookies expired
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Access tokens live 15 minutes, refresh tokens 7 days
//! - Unknown email and wrong password return the same 401

/// User data model and database operations
pub mod users;

/// bcrypt helpers
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Session cookie construction
pub mod cookies;

/// Authentication settings
pub mod settings;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, login, logout, refresh, signup};
pub use sessions::{Claims, JwtKeys, TokenKind};
pub use settings::AuthSettings;

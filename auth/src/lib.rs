//! Authentication utilities library
//!
//! Provides the two cryptographic leaves used by the auth service:
//! - Password hashing (bcrypt with a configurable work factor)
//! - Signed token issuance and verification (JWT, HS256 only)
//!
//! The library holds no storage or I/O concerns; services inject these values
//! into their own domain logic.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new(4).unwrap();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! assert!(!hasher.verify("not_my_password", &digest).unwrap());
//! ```
//!
//! ## Signed Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//! use uuid::Uuid;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let user_id = Uuid::new_v4();
//! let token = codec.issue(user_id, "alice@example.com", "employee").unwrap();
//! let claims = codec.parse(&token).unwrap();
//! assert_eq!(claims.user_id, user_id);
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;

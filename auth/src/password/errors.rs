use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Invalid bcrypt cost: must be between {min} and {max}, got {actual}")]
    InvalidCost { min: u32, max: u32, actual: u32 },

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Malformed password digest: {0}")]
    MalformedDigest(String),
}

use thiserror::Error;

/// Error type for token operations.
///
/// Parse failures are distinct here; the service boundary collapses them
/// into a single generic condition so callers cannot tell which check failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token structure could not be decoded: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

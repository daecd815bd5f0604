use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by an issued token.
///
/// A point-in-time snapshot of the user identity, signed by the service.
/// Consumers must treat everything beyond `user_id` as potentially stale and
/// re-fetch the authoritative record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier as string)
    pub sub: String,

    /// User unique identifier
    pub user_id: Uuid,

    /// Email at issuance time
    pub email: String,

    /// Role at issuance time
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

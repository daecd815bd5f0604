use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::decode_header;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::errors::TokenError;

/// Signs and verifies compact tokens carrying user identity claims.
///
/// HS256 with a symmetric secret, and nothing else: tokens presenting any
/// other algorithm in their header are rejected before signature comparison.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenCodec {
    const ALGORITHM: Algorithm = Algorithm::HS256;

    /// Create a token codec from the service's shared secret.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 32 bytes recommended)
    /// * `lifetime` - Token validity window applied at issuance
    ///
    /// # Returns
    /// TokenCodec instance configured for HS256
    pub fn new(secret: &[u8], lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            lifetime,
        }
    }

    /// Issue a signed token for a user.
    ///
    /// Issued-at is the current time and expiry is issued-at plus the
    /// configured lifetime; callers cannot override either per call.
    ///
    /// # Arguments
    /// * `user_id` - User unique identifier (also becomes the subject)
    /// * `email` - Email to snapshot into the claims
    /// * `role` - Role to snapshot into the claims
    ///
    /// # Returns
    /// Compact signed token string (header.claims.signature)
    ///
    /// # Errors
    /// * `EncodingFailed` - Token serialization or signing failed
    pub fn issue(&self, user_id: Uuid, email: &str, role: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            user_id,
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::new(Self::ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Pure cryptographic operation over the token, the secret, and the
    /// clock; no storage is consulted.
    ///
    /// # Arguments
    /// * `token` - Compact token string to verify
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Malformed` - Structure could not be decoded
    /// * `SignatureInvalid` - Signature does not verify, or the header
    ///   declares an algorithm other than HS256
    /// * `Expired` - Current time is past the expiry claim (zero leeway)
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        let header = decode_header(token).map_err(|e| TokenError::Malformed(e.to_string()))?;
        if header.alg != Self::ALGORITHM {
            return Err(TokenError::SignatureInvalid);
        }

        let mut validation = Validation::new(Self::ALGORITHM);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::SignatureInvalid
                }
                _ => TokenError::Malformed(e.to_string()),
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, Duration::hours(24))
    }

    #[test]
    fn test_issue_and_parse_round_trip() {
        let codec = codec();
        let user_id = Uuid::new_v4();

        let token = codec
            .issue(user_id, "alice@example.com", "employee")
            .expect("Failed to issue token");
        let claims = codec.parse(&token).expect("Failed to parse token");

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, "employee");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_parse_with_wrong_secret() {
        let issuer = codec();
        let verifier = TokenCodec::new(b"another_secret_32_bytes_long_key!!", Duration::hours(24));

        let token = issuer.issue(Uuid::new_v4(), "a@x.com", "employee").unwrap();

        assert_eq!(verifier.parse(&token), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_parse_expired_token() {
        // Negative lifetime puts expiry in the past at issuance
        let codec = TokenCodec::new(SECRET, Duration::hours(-1));

        let token = codec.issue(Uuid::new_v4(), "a@x.com", "employee").unwrap();

        assert_eq!(codec.parse(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_parse_malformed_token() {
        let codec = codec();
        assert!(matches!(
            codec.parse("not.a.token"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(codec.parse(""), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_other_algorithms() {
        let codec = codec();
        let user_id = Uuid::new_v4();
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            user_id,
            email: "a@x.com".to_string(),
            role: "employee".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(24)).timestamp(),
        };

        // Signed with the right secret but the wrong algorithm
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert_eq!(codec.parse(&token), Err(TokenError::SignatureInvalid));
    }

    #[test]
    fn test_tokens_differ_by_issued_at() {
        let codec = codec();
        let user_id = Uuid::new_v4();

        let first = codec.issue(user_id, "a@x.com", "employee").unwrap();
        let second = codec.issue(user_id, "a@x.com", "employee").unwrap();

        let first_claims = codec.parse(&first).unwrap();
        let second_claims = codec.parse(&second).unwrap();
        assert_eq!(first_claims.user_id, second_claims.user_id);
        assert!(second_claims.iat >= first_claims.iat);
    }
}

use super::errors::PasswordError;

// Range accepted by the bcrypt algorithm itself.
const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// Password hashing with a configurable bcrypt work factor.
///
/// The cost is validated once at construction; `hash` and `verify` never
/// re-check it.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a password hasher with the given bcrypt cost.
    ///
    /// # Arguments
    /// * `cost` - Work factor; hashing time is proportional to 2^cost
    ///
    /// # Returns
    /// Configured PasswordHasher instance
    ///
    /// # Errors
    /// * `InvalidCost` - Cost is outside the inclusive range [4, 31]
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(PasswordError::InvalidCost {
                min: MIN_COST,
                max: MAX_COST,
                actual: cost,
            });
        }
        Ok(Self { cost })
    }

    /// Hash a plaintext password.
    ///
    /// The returned digest is self-contained: it encodes the algorithm tag,
    /// the cost, and a freshly generated salt, so verification needs no side
    /// information. Two hashes of the same plaintext differ.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// bcrypt digest string (`$2b$...`)
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored digest.
    ///
    /// A mismatched password is `Ok(false)`, never an error; only a digest
    /// that cannot be parsed fails.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `digest` - Stored bcrypt digest
    ///
    /// # Returns
    /// True if the password matches the digest
    ///
    /// # Errors
    /// * `MalformedDigest` - Digest is not a valid bcrypt string
    pub fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, digest).map_err(|e| PasswordError::MalformedDigest(e.to_string()))
    }
}

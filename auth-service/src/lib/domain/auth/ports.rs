use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthTokens;
use crate::domain::auth::models::EmailAddress;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;

/// Port for the credential service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user and issue a token for it.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, password, and role
    ///
    /// # Returns
    /// Token plus the created user
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered, whether caught by
    ///   the pre-check or by the store's uniqueness constraint
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<AuthTokens, AuthError>;

    /// Authenticate an existing user and issue a token for it.
    ///
    /// # Arguments
    /// * `command` - Email and candidate password
    ///
    /// # Returns
    /// Token plus the stored user
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email, lookup failure, or password
    ///   mismatch; one uniform error for all three
    async fn login(&self, command: LoginCommand) -> Result<AuthTokens, AuthError>;

    /// Verify a token and return the current user record it identifies.
    ///
    /// The claims are trusted only for identity; the user is re-fetched so
    /// callers always see the current role and email.
    ///
    /// # Arguments
    /// * `token` - Compact signed token string
    ///
    /// # Returns
    /// Freshly fetched user entity
    ///
    /// # Errors
    /// * `TokenInvalid` - Malformed, badly signed, or expired token
    /// * `UserNotFound` - User no longer exists
    /// * `DatabaseError` - Store operation failed
    async fn validate_token(&self, token: &str) -> Result<User, AuthError>;
}

/// Persistence operations for the user identity record.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// Implementations must translate a concurrent uniqueness-constraint
    /// violation on email into `UserAlreadyExists`, so the race between the
    /// service's existence pre-check and this insert stays invisible to
    /// callers.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UserAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve user by email address.
    ///
    /// # Arguments
    /// * `email` - Email address to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;

    /// Retrieve user by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;

    /// Check whether a user with this email exists.
    ///
    /// # Arguments
    /// * `email` - Email address to check
    ///
    /// # Returns
    /// True if a user with this email is stored
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn email_exists(&self, email: &EmailAddress) -> Result<bool, AuthError>;
}

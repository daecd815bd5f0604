use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenCodec;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthTokens;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::auth::models::User;
use crate::domain::auth::models::UserId;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::UserRepository;

/// Credential service implementation.
///
/// Holds only immutable configuration (hasher, codec); all mutable state
/// lives behind the injected repository. Generic over the repository for
/// testability.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Configured bcrypt hasher
    /// * `token_codec` - Configured token codec
    ///
    /// # Returns
    /// Configured credential service instance
    pub fn new(repository: Arc<UR>, password_hasher: PasswordHasher, token_codec: TokenCodec) -> Self {
        Self {
            repository,
            password_hasher,
            token_codec,
        }
    }

    fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        self.token_codec
            .issue(user.id.0, user.email.as_str(), user.role.as_str())
            .map_err(|e| AuthError::Unknown(format!("Token generation failed: {}", e)))
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthTokens, AuthError> {
        tracing::info!(email = %command.email, "Attempting registration");

        // Pre-check; the store's uniqueness constraint still backs the race
        // between this check and the insert below.
        if self.repository.email_exists(&command.email).await? {
            tracing::warn!(email = %command.email, "Registration rejected, email taken");
            return Err(AuthError::UserAlreadyExists(command.email.to_string()));
        }

        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| {
                tracing::error!(email = %command.email, error = %e, "Password hashing failed");
                AuthError::Unknown(format!("Password hashing failed: {}", e))
            })?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            role: command.role,
            created_at: Utc::now(),
        };

        let user = self.repository.create(user).await?;
        let token = self.issue_token(&user)?;

        tracing::info!(user_id = %user.id, email = %user.email, "Registration complete");
        Ok(AuthTokens { token, user })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthTokens, AuthError> {
        tracing::info!(email = %command.email, "Attempting login");

        // Missing user and lookup failure collapse into the same outcome as a
        // password mismatch, so callers cannot enumerate accounts.
        let user = match self.repository.find_by_email(&command.email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(email = %command.email, "Login failed, unknown email");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(email = %command.email, error = %e, "Login lookup failed");
                return Err(AuthError::InvalidCredentials);
            }
        };

        match self
            .password_hasher
            .verify(&command.password, &user.password_hash)
        {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(email = %command.email, "Login failed, password mismatch");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::error!(email = %command.email, error = %e, "Login verification failed");
                return Err(AuthError::InvalidCredentials);
            }
        }

        let token = self.issue_token(&user)?;

        tracing::info!(user_id = %user.id, email = %user.email, "Login complete");
        Ok(AuthTokens { token, user })
    }

    async fn validate_token(&self, token: &str) -> Result<User, AuthError> {
        // Which codec check failed stays in the logs only.
        let claims = self.token_codec.parse(token).map_err(|e| {
            tracing::warn!(error = %e, "Token validation failed");
            AuthError::TokenInvalid
        })?;

        let user_id = UserId(claims.user_id);
        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Token valid but user no longer exists");
                AuthError::UserNotFound(user_id.to_string())
            })
    }
}

use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use thiserror::Error;

/// Application configuration for auth-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub bcrypt: BcryptConfig,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// JWT signing configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

/// Password hashing configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct BcryptConfig {
    pub cost: u32,
}

/// Error for configuration values that load but are unusable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("JWT secret must not be empty")]
    EmptyJwtSecret,

    #[error("Bcrypt cost must be between 4 and 31, got {0}")]
    BcryptCostOutOfRange(u32),
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }

    /// Check loaded values against the constraints the services require.
    ///
    /// # Errors
    /// * `EmptyJwtSecret` - No signing secret configured
    /// * `BcryptCostOutOfRange` - Cost outside the inclusive range [4, 31]
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigValidationError::EmptyJwtSecret);
        }
        if !(4..=31).contains(&self.bcrypt.cost) {
            return Err(ConfigValidationError::BcryptCostOutOfRange(self.bcrypt.cost));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/auth".to_string(),
            },
            server: ServerConfig { http_port: 8081 },
            jwt: JwtConfig {
                secret: "test-secret-key-for-jwt-signing-at-least-32-bytes".to_string(),
                expiration_hours: 24,
            },
            bcrypt: BcryptConfig { cost: 12 },
        }
    }

    #[test]
    fn test_validate_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let mut config = valid_config();
        config.jwt.secret = String::new();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyJwtSecret)
        );
    }

    #[test]
    fn test_validate_rejects_cost_out_of_range() {
        let mut config = valid_config();
        config.bcrypt.cost = 3;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::BcryptCostOutOfRange(3))
        );

        config.bcrypt.cost = 32;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::BcryptCostOutOfRange(32))
        );
    }
}

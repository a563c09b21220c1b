//! Database password resolution.
//!
//! The server asks a `SecretResolver` for the password once at startup.
//! Only an environment-backed resolver exists today.

use async_trait::async_trait;

use crate::error::ConfigError;

/// Environment variable read by [`EnvSecretResolver::new`].
pub const DEFAULT_PASSWORD_VAR: &str = "PG_PASSWORD";

/// Supplies secrets needed to reach the database.
#[async_trait]
pub trait SecretResolver: Send + Sync {
    async fn db_password(&self) -> Result<String, ConfigError>;
}

/// Reads the database password from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvSecretResolver {
    var: &'static str,
}

impl EnvSecretResolver {
    pub fn new() -> Self {
        Self::with_var(DEFAULT_PASSWORD_VAR)
    }

    pub fn with_var(var: &'static str) -> Self {
        Self { var }
    }
}

impl Default for EnvSecretResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretResolver for EnvSecretResolver {
    async fn db_password(&self) -> Result<String, ConfigError> {
        match std::env::var(self.var) {
            Ok(password) if !password.is_empty() => Ok(password),
            _ => Err(ConfigError::Missing(self.var)),
        }
    }
}

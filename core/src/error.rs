//! Error types for the todo core.
//!
//! # Design
//! There is no "not found" variant: a missing todo is `Ok(None)` from the
//! store. Backend failures become a 5xx at the HTTP layer; configuration
//! failures are fatal at startup.

use thiserror::Error;

/// Failure inside a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database driver reported an error (connection lost, bad query, ...).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A required setting or secret could not be resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

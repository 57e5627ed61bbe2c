//! Error types.
//!
//! Each concern gets its own enum; [`Error`] wraps them so callers can
//! propagate with `?` and still match on the specific kind.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("missing config value: {field}")]
    MissingField { field: &'static str },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Passphrase verification errors.
///
/// `Incorrect` is an expected outcome (wrong passphrase); `DigestUnavailable`
/// means the check could not be performed at all.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("incorrect passphrase")]
    Incorrect,

    #[error("could not verify passphrase: {0}")]
    DigestUnavailable(String),
}

/// Object storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to list images: {0}")]
    Listing(String),

    #[error("failed to sign url for {key}: {reason}")]
    Signing { key: String, reason: String },

    #[error("invalid expiry: {0}s (must be between 1 and 604800 seconds)")]
    InvalidExpiry(u64),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for portfolio-assist.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Record store error: {0}")]
    Store(#[from] StoreError),

    #[error("Email dispatch error: {0}")]
    Email(#[from] EmailError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Record-store (hosted database) errors.
///
/// A failed insert is fatal to the submission attempt that triggered it.
/// The `detail` string is surfaced verbatim to the user.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Record store returned {status}: {detail}")]
    Api { status: u16, detail: String },
}

/// Email-dispatch errors.
///
/// Never fatal to a submission: logged and absorbed by the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Email service returned {status}: {detail}")]
    Api { status: u16, detail: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use mate_core::model::GameConfigError;

/// Errors emitted by a `QuizDataProvider`.
///
/// The flow controller treats every variant the same way; the detail only
/// reaches the logs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("quiz data request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("quiz data payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("quiz data provider unavailable: {0}")]
    Unavailable(String),
}

/// Errors emitted while loading the game configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Invalid(#[from] GameConfigError),
}

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MATE_API_AUTH must be set to a non-empty token")]
    MissingAuth,

    #[error("invalid {key} value {raw:?}: {reason}")]
    Invalid {
        key: &'static str,
        raw: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_auth: String,
    /// Header accepted as an alternative to the `auth` query parameter.
    pub token_header: String,
    pub images_dir: PathBuf,
    pub question_count: usize,
}

impl Config {
    #[must_use]
    pub fn new(api_auth: impl Into<String>, images_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: 8080,
            api_auth: api_auth.into(),
            token_header: "authorization".into(),
            images_dir: images_dir.into(),
            question_count: 5,
        }
    }

    /// Read the server settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the token is missing or a value does not parse.
    pub fn load() -> Result<Self, ConfigError> {
        let api_auth = var("MATE_API_AUTH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingAuth)?;

        Ok(Self {
            port: try_load("MATE_PORT", "8080")?,
            api_auth,
            token_header: try_load("MATE_TOKEN_HEADER", "authorization")?,
            images_dir: try_load("MATE_IMAGES_DIR", "./images")?,
            question_count: try_load("MATE_QUESTION_COUNT", "5")?,
        })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found");
    })
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            raw: raw.clone(),
            reason: e.to_string(),
        }
    })
}

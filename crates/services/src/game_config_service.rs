use std::path::Path;

use tracing::{info, warn};

use mate_core::model::{GameConfig, GameConfigDraft};

use crate::error::ConfigError;

/// Load the game configuration.
///
/// Without a path the built-in defaults are used. A path that does not exist
/// also falls back to the defaults; a file that exists must parse and validate.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, is not valid TOML, or
/// fails validation.
pub fn load_game_config(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "game config not found, using defaults");
            return Ok(GameConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let draft = parse_game_config(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let config = draft.validate()?;
    info!(path = %path.display(), "loaded game config");
    Ok(config)
}

fn parse_game_config(raw: &str) -> Result<GameConfigDraft, toml::de::Error> {
    toml::from_str(raw)
}

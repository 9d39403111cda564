use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{Format, GameVersion};

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("failed to read preferences from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preferences TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User choices persisted between sessions.
///
/// `export_format` is stored as the integer format code; codes outside the
/// known set are rejected when the file is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub export_format: Option<Format>,
    pub game_version: GameVersion,
    pub show_legacy: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            export_format: None,
            game_version: GameVersion::Any,
            show_legacy: true,
        }
    }
}

impl Preferences {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, PreferencesError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        let contents = fs::read_to_string(path).map_err(|source| PreferencesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let preferences = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), "loaded preferences");
        Ok(preferences)
    }

    pub fn to_toml_string(&self) -> Result<String, PreferencesError> {
        Ok(toml::to_string(self)?)
    }
}

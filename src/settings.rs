//! Persisted player settings
//!
//! A single JSON record, written with camelCase keys. Unknown keys are
//! ignored and missing ones take their defaults, so older files keep loading.

use crate::core::{DEFAULT_LANGUAGE, DEFAULT_WORD_LENGTH};
use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How targets are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// A fresh random word every round
    #[default]
    Unlimited,
    /// The word of the day, falling back to random
    Daily,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unlimited => "unlimited",
            Self::Daily => "daily",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsRecord {
    pub language: String,
    pub mode: GameMode,
    pub word_length: usize,
    pub has_seen_instructions: bool,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            mode: GameMode::default(),
            word_length: DEFAULT_WORD_LENGTH,
            has_seen_instructions: false,
        }
    }
}

/// Loads and saves a [`SettingsRecord`] at a fixed path
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/yawordle/settings.json`, if the platform has a config dir
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("yawordle").join("settings.json"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record; a missing file yields the defaults
    ///
    /// # Errors
    /// `Io` when the file exists but cannot be read, `Parse` when it is not
    /// a valid settings record.
    pub fn load(&self) -> Result<SettingsRecord, SettingsError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                return Ok(SettingsRecord::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write the record as pretty JSON, creating parent directories
    ///
    /// # Errors
    /// `Io` when the directory or file cannot be written.
    pub fn save(&self, settings: &SettingsRecord) -> Result<(), SettingsError> {
        let io_error = |source| SettingsError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = serde_json::to_string_pretty(settings).map_err(|source| {
            SettingsError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(io_error)?;

        info!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

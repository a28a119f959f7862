//! Error types shared across the crate

use crate::core::InvalidTargetWord;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a submitted guess was rejected
///
/// Both variants are recoverable: the round is left untouched and the player
/// corrects the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessValidationError {
    /// Too few or too many letters
    #[error("guess has {actual} letters, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("not in word list")]
    NotInWordList,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordStoreError {
    /// The dictionary for this key is missing or empty
    #[error("no words available for language `{language}` and length {length}")]
    NoWordsAvailable { language: String, length: usize },
    #[error(transparent)]
    InvalidTarget(#[from] InvalidTargetWord),
}

/// Failure of the word of the day lookup
///
/// Never fatal to a round: the orchestrator falls back to a random word.
#[derive(Debug, Error)]
pub enum DailyWordError {
    #[error("word of the day unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

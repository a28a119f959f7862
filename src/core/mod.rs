//! Core domain types for the game
//!
//! Pure types with no I/O: letter states, words, and the guess scoring
//! algorithm. Everything above this module (word store, round state machine,
//! front-ends) is built on these.

mod feedback;
mod state;
mod word;

pub use feedback::{Feedback, evaluate};
pub use state::LetterState;
pub use word::{GuessAttempt, InvalidTargetWord, TargetWord, normalize_word};

/// Number of attempts a player gets in one round
pub const MAX_ATTEMPTS: usize = 6;

/// Word length used when nothing else is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Language code used when nothing else is configured
pub const DEFAULT_LANGUAGE: &str = "en";

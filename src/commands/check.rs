//! Score a single guess against a target
//!
//! Handy for checking how repeated letters are scored without playing a round.

use crate::core::{Feedback, TargetWord, evaluate};
use crate::error::GuessValidationError;
use crate::wordlists::WordStore;
use anyhow::{Context, Result};

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
    /// Whether the guess is a known word; `None` when not looked up
    pub in_word_list: Option<bool>,
}

/// Score `guess` against `target`
///
/// When a store is given, the guess is also looked up in the word list for
/// `language`.
///
/// # Errors
///
/// Returns an error if either word is empty or not made of letters, or if the
/// two differ in length.
pub fn check_guess(
    guess: &str,
    target: &str,
    store: Option<(&mut WordStore, &str)>,
) -> Result<CheckResult> {
    let guess = TargetWord::new(guess).context("invalid guess")?;
    let target = TargetWord::new(target).context("invalid target")?;

    let states = evaluate(guess.letters(), target.letters()).ok_or(
        GuessValidationError::WrongLength {
            expected: target.len(),
            actual: guess.len(),
        },
    )?;

    let in_word_list = store.map(|(store, language)| store.is_valid_word(language, guess.text()));

    Ok(CheckResult {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        feedback: Feedback::new(states),
        in_word_list,
    })
}

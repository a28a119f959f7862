//! Target words and guess attempts
//!
//! Words are compared letter by letter as Unicode scalar values after
//! uppercasing. No locale-specific folding is applied, so `Ą` and `A` are
//! different letters.

use super::LetterState;
use std::fmt;
use thiserror::Error;

/// Trim and uppercase a raw word, returning `None` when nothing is left
///
/// # Examples
/// ```
/// use yawordle::core::normalize_word;
///
/// assert_eq!(normalize_word("  crane\r"), Some("CRANE".to_string()));
/// assert_eq!(normalize_word("   "), None);
/// ```
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Error for text that cannot be used as a round's hidden word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTargetWord {
    #[error("target word must not be empty")]
    Empty,
    #[error("target word `{0}` contains characters that are not letters")]
    NotLetters(String),
}

/// The hidden word of one round
///
/// Always uppercase and non-empty; its letter count defines the word length
/// of the round.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetWord {
    text: String,
    letters: Vec<char>,
}

impl TargetWord {
    /// Create a target word from raw text
    ///
    /// # Errors
    /// Returns `InvalidTargetWord` if the text is empty after trimming or
    /// contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use yawordle::core::TargetWord;
    ///
    /// let word = TargetWord::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(TargetWord::new("").is_err());
    /// assert!(TargetWord::new("cr4ne").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InvalidTargetWord> {
        let text = normalize_word(text).ok_or(InvalidTargetWord::Empty)?;

        if !text.chars().all(char::is_alphabetic) {
            return Err(InvalidTargetWord::NotLetters(text));
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One row of the guess grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessAttempt {
    pub index: usize,
    pub letters: Vec<char>,
    /// Present once the attempt has been submitted and scored
    pub states: Option<Vec<LetterState>>,
}

impl GuessAttempt {
    #[must_use]
    pub const fn evaluated(index: usize, letters: Vec<char>, states: Vec<LetterState>) -> Self {
        Self {
            index,
            letters,
            states: Some(states),
        }
    }

    /// Letters as a string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().collect()
    }

    /// Letter/state pairs for an evaluated attempt, empty otherwise
    pub fn scored_letters(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.letters
            .iter()
            .copied()
            .zip(self.states.iter().flatten().copied())
    }
}

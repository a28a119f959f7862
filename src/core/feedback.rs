//! Guess scoring
//!
//! Scores a guess against the target with the standard two-pass rules:
//! exact matches first, then misplaced letters from whatever the first pass
//! left unused. Each target letter can credit at most one guess letter, which
//! is what makes repeated letters come out right.

use super::LetterState;
use std::fmt;

/// Score `guess` against `target`
///
/// Returns one state per guess position, in guess order, or `None` when the
/// two words differ in length.
///
/// # Algorithm
/// 1. Copy both words into per-position slots (`Some(letter)` = unused)
/// 2. First pass: equal letters are `Correct`; both slots are consumed
/// 3. Second pass: every remaining guess letter takes the leftmost unused
///    target slot with the same letter (`Present`), or is `Absent`
///
/// # Examples
/// ```
/// use yawordle::core::{LetterState::*, evaluate};
///
/// let guess: Vec<char> = "TRACE".chars().collect();
/// let target: Vec<char> = "CRANE".chars().collect();
///
/// assert_eq!(
///     evaluate(&guess, &target),
///     Some(vec![Absent, Correct, Correct, Present, Correct])
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &[char], target: &[char]) -> Option<Vec<LetterState>> {
    if guess.len() != target.len() {
        return None;
    }

    let mut result = vec![LetterState::Absent; guess.len()];
    let mut target_slots: Vec<Option<char>> = target.iter().copied().map(Some).collect();
    let mut guess_slots: Vec<Option<char>> = guess.iter().copied().map(Some).collect();

    // First pass: exact matches
    for (i, (g, t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            result[i] = LetterState::Correct;
            target_slots[i] = None;
            guess_slots[i] = None;
        }
    }

    // Second pass: misplaced letters from the remaining pool
    for (i, slot) in guess_slots.iter().enumerate() {
        let Some(letter) = *slot else {
            continue;
        };

        if let Some(j) = target_slots.iter().position(|t| *t == Some(letter)) {
            result[i] = LetterState::Present;
            target_slots[j] = None;
        }
    }

    Some(result)
}

/// Scored feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterState>);

impl Feedback {
    /// Wrap an existing state sequence
    #[must_use]
    pub const fn new(states: Vec<LetterState>) -> Self {
        Self(states)
    }

    /// Score a guess string against a target string
    ///
    /// Both are uppercased first. Returns `None` when the letter counts differ.
    ///
    /// # Examples
    /// ```
    /// use yawordle::core::Feedback;
    ///
    /// let feedback = Feedback::calculate("crane", "crane").unwrap();
    /// assert!(feedback.is_perfect());
    /// assert!(Feedback::calculate("crane", "cranes").is_none());
    /// ```
    #[must_use]
    pub fn calculate(guess: &str, target: &str) -> Option<Self> {
        let guess: Vec<char> = guess.to_uppercase().chars().collect();
        let target: Vec<char> = target.to_uppercase().chars().collect();
        evaluate(&guess, &target).map(Self)
    }

    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    #[must_use]
    pub fn into_states(self) -> Vec<LetterState> {
        self.0
    }

    /// Whether every position is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Correct).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Present).count()
    }

    /// Render as an emoji row like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl From<Vec<LetterState>> for Feedback {
    fn from(states: Vec<LetterState>) -> Self {
        Self(states)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

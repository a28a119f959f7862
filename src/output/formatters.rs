//! Formatting utilities for terminal output

use crate::core::LetterState;
use colored::{ColoredString, Colorize};

/// Emoji row for a scored guess, e.g. `⬛🟩🟩🟨🟩`
#[must_use]
pub fn states_to_emoji(states: &[LetterState]) -> String {
    states.iter().map(|state| state.emoji()).collect()
}

/// One letter as a colored tile
#[must_use]
pub fn tile(letter: char, state: LetterState) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Empty => text.normal(),
    }
}

/// A whole scored guess as adjacent tiles
#[must_use]
pub fn tiles(letters: &[char], states: &[LetterState]) -> String {
    letters
        .iter()
        .zip(states)
        .map(|(&letter, &state)| tile(letter, state).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

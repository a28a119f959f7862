//! On-screen keyboard state

use super::round::RoundEvent;
use crate::core::LetterState;
use rustc_hash::FxHashMap;

/// Best known state of every letter guessed so far
///
/// States only ever move up the `Empty < Absent < Present < Correct` order,
/// so a letter found once never turns grey again.
#[derive(Debug, Clone, Default)]
pub struct KeyboardAggregate {
    states: FxHashMap<char, LetterState>,
}

impl KeyboardAggregate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the aggregate
    ///
    /// Returns the number of letters whose state changed.
    pub fn record_evaluation(&mut self, letters: &[char], states: &[LetterState]) -> usize {
        let mut changed = 0;
        for (&letter, &state) in letters.iter().zip(states) {
            let entry = self.states.entry(letter).or_default();
            let upgraded = entry.upgrade(state);
            if upgraded != *entry {
                *entry = upgraded;
                changed += 1;
            }
        }
        changed
    }

    /// Apply the event if it is a `GuessEvaluated`; other events are ignored
    pub fn apply(&mut self, event: &RoundEvent) {
        if let RoundEvent::GuessEvaluated {
            letters, states, ..
        } = event
        {
            self.record_evaluation(letters, states);
        }
    }

    /// `Empty` for letters never guessed
    #[must_use]
    pub fn state_of(&self, letter: char) -> LetterState {
        self.states.get(&letter).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.states.iter().map(|(&letter, &state)| (letter, state))
    }

    pub fn reset(&mut self) {
        self.states.clear();
    }
}

/// A key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "ENTER" => Some(Self::Enter),
            "BACKSPACE" => Some(Self::Backspace),
            _ => {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if ch.is_alphabetic() => Some(Self::Letter(ch)),
                    _ => None,
                }
            }
        }
    }

    /// Short label for rendering
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(ch) => ch.to_string(),
            Self::Enter => "⏎".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

const ENGLISH_ROWS: [&str; 3] = [
    "Q,W,E,R,T,Y,U,I,O,P",
    "A,S,D,F,G,H,J,K,L",
    "ENTER,Z,X,C,V,B,N,M,BACKSPACE",
];

const POLISH_ROWS: [&str; 4] = [
    "Ą,Ć,Ę,Ł,Ó,Ś,Ń,Ż,Ź",
    "Q,W,E,R,T,Y,U,I,O,P",
    "A,S,D,F,G,H,J,K,L",
    "ENTER,Z,X,C,V,B,N,M,BACKSPACE",
];

/// Rows of keys for a language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    rows: Vec<Vec<Key>>,
}

impl KeyboardLayout {
    /// Layout for `language`, falling back to the English one
    #[must_use]
    pub fn for_language(language: &str) -> Self {
        match language.trim().to_lowercase().as_str() {
            "pl" => Self::from_rows(&POLISH_ROWS),
            _ => Self::from_rows(&ENGLISH_ROWS),
        }
    }

    /// Build from comma-separated rows; unknown tokens are skipped
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.split(',').map(str::trim).filter_map(Key::parse).collect())
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }

    /// Every letter key in the layout
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.rows.iter().flatten().filter_map(|key| match key {
            Key::Letter(ch) => Some(*ch),
            _ => None,
        })
    }
}

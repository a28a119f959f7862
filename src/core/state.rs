//! Per-letter feedback state
//!
//! States are ordered by priority: `Empty < Absent < Present < Correct`.
//! The ordering drives keyboard tinting, where a key may only ever upgrade.

use std::cmp::Ordering;
use std::fmt;

/// Feedback for a single letter position, or the tint of a keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// Not evaluated yet
    #[default]
    Empty,
    /// Letter does not occur in the target (or all occurrences are used up)
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter is at the right position
    Correct,
}

impl LetterState {
    /// Priority rank used for comparisons
    ///
    /// Ordering is defined here rather than by declaration order, so
    /// reordering the variants cannot change keyboard upgrade behaviour.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Absent => 1,
            Self::Present => 2,
            Self::Correct => 3,
        }
    }

    /// Returns the higher-priority state of the two
    #[inline]
    #[must_use]
    pub fn upgrade(self, other: Self) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }

    /// Square emoji used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }
}

impl PartialOrd for LetterState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LetterState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

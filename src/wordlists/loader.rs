//! Word list normalization
//!
//! Turns raw list text into clean, uppercase, de-duplicated words.

use crate::core::normalize_word;
use rustc_hash::FxHashSet;
use tracing::warn;

/// Normalize raw whitespace-delimited list text
///
/// Every entry is trimmed and uppercased; empty entries and duplicates are
/// dropped, keeping the first occurrence. Entries whose letter count differs
/// from `length`, or that contain anything but letters, are dropped too: every
/// word in a list must be usable as a target of that length.
///
/// # Examples
/// ```
/// use yawordle::wordlists::loader::normalize_words;
///
/// let words = normalize_words("crane\r\nSLATE  crane\n\n toolong", 5);
/// assert_eq!(words, vec!["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn normalize_words(text: &str, length: usize) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut dropped = 0usize;

    let words: Vec<String> = text
        .split_whitespace()
        .filter_map(normalize_word)
        .filter(|word| {
            let fits =
                word.chars().count() == length && word.chars().all(char::is_alphabetic);
            if !fits {
                dropped += 1;
            }
            fits
        })
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if dropped > 0 {
        warn!(dropped, length, "skipped malformed words");
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_and_trims() {
        let words = normalize_words("  crane\n\tslate\r\n", 5);
        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn normalize_drops_blank_entries() {
        let words = normalize_words("\n\n   \ncrane\n\n", 5);
        assert_eq!(words, vec!["CRANE"]);
    }

    #[test]
    fn normalize_deduplicates_case_insensitively() {
        let words = normalize_words("crane CRANE Crane slate", 5);
        assert_eq!(words, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn normalize_skips_wrong_length() {
        let words = normalize_words("crane cranes cran", 5);
        assert_eq!(words, vec!["CRANE"]);
    }

    #[test]
    fn normalize_skips_non_letters() {
        let words = normalize_words("cr4ne x-ray slate", 5);
        assert_eq!(words, vec!["SLATE"]);
    }

    #[test]
    fn normalize_counts_letters_not_bytes() {
        let words = normalize_words("żółty łóżko", 5);
        assert_eq!(words, vec!["ŻÓŁTY", "ŁÓŻKO"]);
    }
}

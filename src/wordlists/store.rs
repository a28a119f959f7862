//! Dictionary cache
//!
//! Loads the solutions and valid-guess sets per `(language, length)` key on
//! first use and keeps them for the lifetime of the store. One store is owned
//! by the session and injected where needed; there is no global cache.

use super::loader::normalize_words;
use super::source::{WordListRole, WordListSource};
use crate::error::WordStoreError;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Cache key: language code plus word length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordDictionaryKey {
    language: String,
    length: usize,
}

impl WordDictionaryKey {
    /// Language codes are case-insensitive
    #[must_use]
    pub fn new(language: &str, length: usize) -> Self {
        Self {
            language: language.trim().to_lowercase(),
            length,
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for WordDictionaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.language, self.length)
    }
}

/// Check that decides whether a guess is a real word
pub trait WordValidator {
    /// `word` is already uppercase
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<F> WordValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Both word sets for one key
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    solutions: Vec<String>,
    valid: FxHashSet<String>,
}

impl Dictionary {
    /// Build from normalized lists; the valid set is guesses ∪ solutions
    #[must_use]
    pub fn new(solutions: Vec<String>, guesses: Vec<String>) -> Self {
        let mut valid: FxHashSet<String> = guesses.into_iter().collect();
        valid.extend(solutions.iter().cloned());
        Self { solutions, valid }
    }

    /// Load and normalize both lists for `key` from `source`
    ///
    /// Missing lists become empty ones.
    pub fn load(source: &dyn WordListSource, key: &WordDictionaryKey) -> Self {
        let read = |role: WordListRole| match source.load(key.language(), key.length(), role)
        {
            Some(text) => normalize_words(&text, key.length()),
            None => {
                warn!(%key, %role, "word list not found, using an empty list");
                Vec::new()
            }
        };

        let solutions = read(WordListRole::Solutions);
        let guesses = read(WordListRole::Guesses);
        Self::new(solutions, guesses)
    }

    #[must_use]
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Number of accepted guesses, solutions included
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }
}

impl WordValidator for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.valid.contains(word)
    }
}

/// Lazily populated dictionary cache with an owned random source
pub struct WordStore {
    source: Box<dyn WordListSource + Send + Sync>,
    cache: FxHashMap<WordDictionaryKey, Arc<Dictionary>>,
    rng: StdRng,
}

impl WordStore {
    /// Create a store seeded from the OS
    #[must_use]
    pub fn new(source: impl WordListSource + Send + Sync + 'static) -> Self {
        Self::with_rng(source, StdRng::from_os_rng())
    }

    /// Create a store with a fixed seed, for reproducible picks
    #[must_use]
    pub fn with_seed(source: impl WordListSource + Send + Sync + 'static, seed: u64) -> Self {
        Self::with_rng(source, StdRng::seed_from_u64(seed))
    }

    fn with_rng(source: impl WordListSource + Send + Sync + 'static, rng: StdRng) -> Self {
        Self {
            source: Box::new(source),
            cache: FxHashMap::default(),
            rng,
        }
    }

    /// Load the dictionary for `(language, length)` unless already cached
    ///
    /// Never fails: missing lists are cached as empty, and callers check for
    /// the "no words" condition themselves.
    pub fn ensure_loaded(&mut self, language: &str, length: usize) -> Arc<Dictionary> {
        let key = WordDictionaryKey::new(language, length);

        if let Some(dictionary) = self.cache.get(&key) {
            return Arc::clone(dictionary);
        }

        let dictionary = Arc::new(Dictionary::load(self.source.as_ref(), &key));
        info!(
            %key,
            solutions = dictionary.solutions().len(),
            valid = dictionary.valid_count(),
            "loaded dictionary"
        );

        self.cache.insert(key, Arc::clone(&dictionary));
        dictionary
    }

    /// Whether the key has been loaded already
    #[must_use]
    pub fn is_loaded(&self, language: &str, length: usize) -> bool {
        self.cache
            .contains_key(&WordDictionaryKey::new(language, length))
    }

    /// Pick a uniformly random solution word
    ///
    /// # Errors
    /// Returns `NoWordsAvailable` when the solutions list for the key is empty.
    pub fn random_solution(
        &mut self,
        language: &str,
        length: usize,
    ) -> Result<String, WordStoreError> {
        let dictionary = self.ensure_loaded(language, length);

        dictionary
            .solutions()
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| WordStoreError::NoWordsAvailable {
                language: language.to_string(),
                length,
            })
    }

    /// Check a guess against the valid set for its own length
    ///
    /// Empty input and lengths without a dictionary are simply invalid.
    pub fn is_valid_word(&mut self, language: &str, word: &str) -> bool {
        let word = word.trim().to_uppercase();
        if word.is_empty() {
            return false;
        }

        let length = word.chars().count();
        self.ensure_loaded(language, length).is_valid_word(&word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory source that counts how often it is asked
    struct FakeSource {
        solutions: &'static str,
        guesses: Option<&'static str>,
        loads: Arc<AtomicUsize>,
    }

    impl FakeSource {
        fn new(solutions: &'static str, guesses: Option<&'static str>) -> Self {
            Self {
                solutions,
                guesses,
                loads: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl WordListSource for FakeSource {
        fn load(&self, language: &str, length: usize, role: WordListRole) -> Option<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if language != "en" || length != 5 {
                return None;
            }
            match role {
                WordListRole::Solutions => Some(self.solutions.to_string()),
                WordListRole::Guesses => self.guesses.map(str::to_string),
            }
        }
    }

    #[test]
    fn valid_set_is_union_of_lists() {
        let mut store = WordStore::with_seed(FakeSource::new("crane slate", Some("xylyl")), 7);

        assert!(store.is_valid_word("en", "crane"));
        assert!(store.is_valid_word("en", "XYLYL"));
        assert!(!store.is_valid_word("en", "zzzzz"));
    }

    #[test]
    fn ensure_loaded_is_idempotent() {
        let source = FakeSource::new("crane", None);
        let loads = Arc::clone(&source.loads);
        let mut store = WordStore::with_seed(source, 1);

        store.ensure_loaded("en", 5);
        store.ensure_loaded("EN", 5);
        store.random_solution("en", 5).unwrap();

        // One load per role, never repeated
        assert_eq!(loads.load(Ordering::SeqCst), 2);
        assert!(store.is_loaded("en", 5));
    }

    #[test]
    fn lengths_get_separate_slots() {
        let mut store = WordStore::with_seed(FakeSource::new("crane", None), 1);

        assert!(!store.ensure_loaded("en", 5).is_empty());
        assert!(store.ensure_loaded("en", 6).is_empty());
        assert!(store.is_loaded("en", 6));
    }

    #[test]
    fn missing_lists_fail_softly() {
        let mut store = WordStore::with_seed(FakeSource::new("crane", None), 1);

        let dictionary = store.ensure_loaded("pl", 5);
        assert!(dictionary.is_empty());
        assert_eq!(
            store.random_solution("pl", 5),
            Err(WordStoreError::NoWordsAvailable {
                language: "pl".to_string(),
                length: 5,
            })
        );
    }

    #[test]
    fn missing_guesses_still_accepts_solutions() {
        let mut store = WordStore::with_seed(FakeSource::new("crane slate", None), 1);
        assert!(store.is_valid_word("en", "slate"));
    }

    #[test]
    fn random_solution_comes_from_solutions() {
        let mut store = WordStore::with_seed(FakeSource::new("crane slate irate", Some("xylyl")), 42);

        for _ in 0..20 {
            let word = store.random_solution("en", 5).unwrap();
            assert!(["CRANE", "SLATE", "IRATE"].contains(&word.as_str()));
        }
    }

    #[test]
    fn random_solution_reaches_every_word() {
        let mut store = WordStore::with_seed(FakeSource::new("crane slate", None), 3);
        let picks: FxHashSet<String> = (0..64)
            .map(|_| store.random_solution("en", 5).unwrap())
            .collect();
        assert_eq!(picks.len(), 2);
    }

    #[test]
    fn is_valid_word_rejects_empty_and_unknown_lengths() {
        let mut store = WordStore::with_seed(FakeSource::new("crane", None), 1);
        assert!(!store.is_valid_word("en", ""));
        assert!(!store.is_valid_word("en", "   "));
        assert!(!store.is_valid_word("en", "cranes"));
    }

    #[test]
    fn closures_are_validators() {
        let calls = Cell::new(0);
        let validator = |word: &str| {
            calls.set(calls.get() + 1);
            word == "CRANE"
        };
        assert!(validator.is_valid_word("CRANE"));
        assert!(!validator.is_valid_word("SLATE"));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn dictionary_validator_expects_uppercase() {
        let dictionary = Dictionary::new(vec!["CRANE".to_string()], Vec::new());
        assert!(dictionary.is_valid_word("CRANE"));
        assert!(!dictionary.is_valid_word("crane"));
    }

    #[test]
    fn embedded_english_dictionary_loads() {
        let mut store = WordStore::with_seed(crate::wordlists::EmbeddedWordLists, 1);
        let dictionary = store.ensure_loaded("en", 5);
        assert!(dictionary.solutions().len() > 100);
        assert!(dictionary.valid_count() >= dictionary.solutions().len());
        assert!(store.is_valid_word("en", "crane"));
    }
}

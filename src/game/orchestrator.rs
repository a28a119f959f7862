//! Round setup
//!
//! Picks the target for a new round and hands back a started [`RoundState`].
//! This is the only place the game suspends: the daily lookup is awaited under
//! a timeout and any failure degrades to a random word.

use super::round::RoundState;
use crate::core::TargetWord;
use crate::error::WordStoreError;
use crate::settings::{GameMode, SettingsRecord};
use crate::wordlists::{WordOfTheDay, WordStore};
use std::time::Duration;
use tracing::{info, warn};

/// Default bound on the word of the day lookup
pub const DEFAULT_DAILY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where a round's target came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    Daily,
    Random,
}

/// A freshly started round
pub struct StartedRound {
    pub round: RoundState,
    pub source: TargetSource,
}

/// Owns the word store and the daily word service for a session
pub struct Orchestrator<D> {
    store: WordStore,
    daily: D,
    daily_timeout: Duration,
}

impl<D: WordOfTheDay> Orchestrator<D> {
    #[must_use]
    pub fn new(store: WordStore, daily: D) -> Self {
        Self {
            store,
            daily,
            daily_timeout: DEFAULT_DAILY_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_daily_timeout(mut self, timeout: Duration) -> Self {
        self.daily_timeout = timeout;
        self
    }

    #[must_use]
    pub fn store(&self) -> &WordStore {
        &self.store
    }

    /// Pick the target for a round under `settings`
    ///
    /// # Errors
    /// `NoWordsAvailable` when the random fallback has nothing to pick from.
    pub async fn choose_target(
        &mut self,
        settings: &SettingsRecord,
    ) -> Result<(TargetWord, TargetSource), WordStoreError> {
        let language = settings.language.as_str();
        let length = settings.word_length;

        if settings.mode == GameMode::Daily
            && let Some(target) = self.daily_target(language, length).await
        {
            info!(language, length, "using word of the day");
            return Ok((target, TargetSource::Daily));
        }

        let word = self.store.random_solution(language, length)?;
        Ok((TargetWord::new(&word)?, TargetSource::Random))
    }

    async fn daily_target(&self, language: &str, length: usize) -> Option<TargetWord> {
        let lookup = self.daily.word_of_the_day(language, length);

        let word = match tokio::time::timeout(self.daily_timeout, lookup).await {
            Ok(Ok(Some(word))) => word,
            Ok(Ok(None)) => {
                warn!(language, length, "no word of the day, falling back to random");
                return None;
            }
            Ok(Err(e)) => {
                warn!(error = %e, "word of the day failed, falling back to random");
                return None;
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.daily_timeout.as_millis(),
                    "word of the day timed out, falling back to random"
                );
                return None;
            }
        };

        match TargetWord::new(&word) {
            Ok(target) if target.len() == length => Some(target),
            Ok(target) => {
                warn!(
                    expected = length,
                    actual = target.len(),
                    "word of the day has the wrong length, falling back to random"
                );
                None
            }
            Err(e) => {
                warn!(error = %e, "word of the day is not a word, falling back to random");
                None
            }
        }
    }

    /// Choose a target and start a round validated by its dictionary
    ///
    /// The round runs in degraded mode when the dictionary has no valid words.
    ///
    /// # Errors
    /// `NoWordsAvailable` propagates; no round is created.
    pub async fn start_round(
        &mut self,
        settings: &SettingsRecord,
    ) -> Result<StartedRound, WordStoreError> {
        let (target, source) = self.choose_target(settings).await?;
        let dictionary = self
            .store
            .ensure_loaded(&settings.language, settings.word_length);

        let mut round = if dictionary.is_empty() {
            warn!(
                language = %settings.language,
                length = settings.word_length,
                "no valid word list, accepting any guess"
            );
            RoundState::new()
        } else {
            RoundState::new().with_validator(dictionary)
        };

        round.start(target);
        Ok(StartedRound { round, source })
    }
}

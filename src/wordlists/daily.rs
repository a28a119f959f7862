//! Word of the day
//!
//! The lookup is an opaque async call. Implementations never fall back to a
//! random word themselves; that is the orchestrator's job.

use super::loader::normalize_words;
use super::source::{WordListRole, WordListSource};
use crate::error::DailyWordError;
use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Async source of the daily puzzle word
pub trait WordOfTheDay {
    /// Returns the word for today, or `None` when the service has none
    ///
    /// No timeout or retry is applied here.
    fn word_of_the_day(
        &self,
        language: &str,
        length: usize,
    ) -> impl Future<Output = Result<Option<String>, DailyWordError>> + Send;
}

/// Day zero for puzzle numbering
///
/// # Panics
/// Will not panic - the date is a fixed, valid calendar date.
#[must_use]
pub fn daily_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).expect("fixed epoch is a valid date")
}

/// Offline daily word: the same pick for everyone on a given date
///
/// Picks from the solutions list with a generator seeded by the puzzle
/// number, so every player with the same lists gets the same word.
#[derive(Clone)]
pub struct DateSeededDaily {
    source: Arc<dyn WordListSource + Send + Sync>,
    date: Option<NaiveDate>,
}

impl DateSeededDaily {
    #[must_use]
    pub fn new(source: Arc<dyn WordListSource + Send + Sync>) -> Self {
        Self { source, date: None }
    }

    /// Pin the date instead of using the local clock
    #[must_use]
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Puzzle number for `date`, counted from `daily_epoch()`
    #[must_use]
    pub fn puzzle_number(date: NaiveDate) -> i64 {
        (date - daily_epoch()).num_days()
    }

    fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl WordOfTheDay for DateSeededDaily {
    fn word_of_the_day(
        &self,
        language: &str,
        length: usize,
    ) -> impl Future<Output = Result<Option<String>, DailyWordError>> + Send {
        let number = Self::puzzle_number(self.today());
        let text = self.source.load(language, length, WordListRole::Solutions);
        let language = language.to_string();

        async move {
            let text = text.ok_or_else(|| {
                DailyWordError::Unavailable(format!("no solutions for {language}_{length}"))
            })?;

            let words = normalize_words(&text, length);
            let mut rng = StdRng::seed_from_u64(number.unsigned_abs());
            let word = words.choose(&mut rng).cloned();

            debug!(number, ?word, "picked word of the day");
            Ok(word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::EmbeddedWordLists;

    struct Lists(&'static str);

    impl WordListSource for Lists {
        fn load(&self, _: &str, _: usize, role: WordListRole) -> Option<String> {
            (role == WordListRole::Solutions).then(|| self.0.to_string())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn puzzle_numbers_count_from_epoch() {
        assert_eq!(DateSeededDaily::puzzle_number(daily_epoch()), 0);
        assert_eq!(DateSeededDaily::puzzle_number(date(2021, 6, 20)), 1);
        assert_eq!(DateSeededDaily::puzzle_number(date(2021, 6, 18)), -1);
    }

    #[tokio::test]
    async fn same_date_gives_same_word() {
        let daily = DateSeededDaily::new(Arc::new(EmbeddedWordLists)).on_date(date(2025, 3, 1));

        let first = daily.word_of_the_day("en", 5).await.unwrap();
        let second = daily.word_of_the_day("en", 5).await.unwrap();

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn word_comes_from_solutions() {
        let daily = DateSeededDaily::new(Arc::new(Lists("crane\nslate"))).on_date(date(2024, 1, 1));
        let word = daily.word_of_the_day("en", 5).await.unwrap().unwrap();
        assert!(word == "CRANE" || word == "SLATE");
    }

    #[tokio::test]
    async fn empty_list_gives_none() {
        let daily = DateSeededDaily::new(Arc::new(Lists("  \n"))).on_date(date(2024, 1, 1));
        assert_eq!(daily.word_of_the_day("en", 5).await.unwrap(), None);
    }

    #[tokio::test]
    async fn missing_list_is_an_error() {
        let daily = DateSeededDaily::new(Arc::new(EmbeddedWordLists));
        let result = daily.word_of_the_day("xx", 5).await;
        assert!(matches!(result, Err(DailyWordError::Unavailable(_))));
    }
}

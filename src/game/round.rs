//! Round state machine
//!
//! A round holds the hidden target, the in-progress guess buffer and the
//! history of scored attempts. Every mutation returns the events it caused, in
//! order; an empty vector means the call was a no-op.

use crate::core::{GuessAttempt, LetterState, MAX_ATTEMPTS, TargetWord, evaluate};
use crate::error::GuessValidationError;
use crate::wordlists::WordValidator;
use std::fmt::Write;
use std::sync::Arc;
use tracing::debug;

/// Outcome of a round so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Notification emitted by a round mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// The guess buffer changed
    GuessUpdated { attempt: usize, text: String },
    /// A guess was accepted and scored
    GuessEvaluated {
        attempt: usize,
        letters: Vec<char>,
        states: Vec<LetterState>,
    },
    /// A submitted guess was rejected; nothing else changed
    GuessValidationFailed(GuessValidationError),
    /// Emitted exactly once per round, after the final `GuessEvaluated`
    GameFinished { is_win: bool },
}

/// State of a single round of play
///
/// Without a validator every correctly sized guess is accepted ("degraded
/// mode"), which keeps the game playable when no guess list is available.
#[derive(Default)]
pub struct RoundState {
    target: Option<TargetWord>,
    current_attempt: usize,
    buffer: Vec<char>,
    attempts: Vec<GuessAttempt>,
    finished: bool,
    win: bool,
    validator: Option<Arc<dyn WordValidator + Send + Sync>>,
}

impl RoundState {
    /// An idle round; nothing happens until [`RoundState::start`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject guesses the validator does not know
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn WordValidator + Send + Sync>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Begin a fresh round against `target`
    ///
    /// Clears the buffer, the history and the finished flags. The validator
    /// is kept.
    pub fn start(&mut self, target: TargetWord) {
        debug!(length = target.len(), "round started");
        self.target = Some(target);
        self.current_attempt = 0;
        self.buffer.clear();
        self.attempts.clear();
        self.finished = false;
        self.win = false;
    }

    /// Append a letter to the guess buffer
    ///
    /// Ignored when the round is idle or finished, the buffer is full, or the
    /// character is not a letter.
    pub fn type_letter(&mut self, letter: char) -> Vec<RoundEvent> {
        let Some(length) = self.word_length() else {
            return Vec::new();
        };
        if self.finished || self.buffer.len() >= length || !letter.is_alphabetic() {
            return Vec::new();
        }

        self.buffer.push(uppercase_letter(letter));
        vec![self.guess_updated()]
    }

    /// Remove the last letter of the guess buffer
    pub fn delete_letter(&mut self) -> Vec<RoundEvent> {
        if self.target.is_none() || self.finished || self.buffer.pop().is_none() {
            return Vec::new();
        }
        vec![self.guess_updated()]
    }

    /// Validate and score the guess buffer
    ///
    /// On rejection only a `GuessValidationFailed` event is returned and the
    /// buffer is left intact. On acceptance the attempt is recorded, and the
    /// round ends if it was a win or the last attempt.
    pub fn submit_guess(&mut self) -> Vec<RoundEvent> {
        if self.finished {
            return Vec::new();
        }
        let Some(target) = &self.target else {
            return Vec::new();
        };

        if self.buffer.len() != target.len() {
            return vec![RoundEvent::GuessValidationFailed(
                GuessValidationError::WrongLength {
                    expected: target.len(),
                    actual: self.buffer.len(),
                },
            )];
        }

        // The target itself is always accepted, even when missing from the list
        let guess: String = self.buffer.iter().collect();
        if guess != target.text()
            && let Some(validator) = &self.validator
            && !validator.is_valid_word(&guess)
        {
            debug!(guess, "rejected guess");
            return vec![RoundEvent::GuessValidationFailed(
                GuessValidationError::NotInWordList,
            )];
        }

        let Some(states) = evaluate(&self.buffer, target.letters()) else {
            return Vec::new();
        };

        let attempt = self.current_attempt;
        let is_win = states.iter().all(|&state| state == LetterState::Correct);
        let letters = self.buffer.clone();

        self.attempts
            .push(GuessAttempt::evaluated(attempt, letters.clone(), states.clone()));
        let mut events = vec![RoundEvent::GuessEvaluated {
            attempt,
            letters,
            states,
        }];

        if is_win {
            self.finish(true);
        } else {
            self.current_attempt += 1;
            self.buffer.clear();
            if self.current_attempt < MAX_ATTEMPTS {
                return events;
            }
            self.finish(false);
        }

        events.push(RoundEvent::GameFinished { is_win });
        events
    }

    fn finish(&mut self, is_win: bool) {
        self.finished = true;
        self.win = is_win;
        debug!(is_win, attempts = self.attempts.len(), "round finished");
    }

    fn guess_updated(&self) -> RoundEvent {
        RoundEvent::GuessUpdated {
            attempt: self.current_attempt,
            text: self.guess_text(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> Option<&TargetWord> {
        self.target.as_ref()
    }

    /// Letter count of the target, once started
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.target.as_ref().map(TargetWord::len)
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        MAX_ATTEMPTS
    }

    /// Zero-based index of the row being typed; equals `MAX_ATTEMPTS` after a loss
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    #[must_use]
    pub fn guess_buffer(&self) -> &[char] {
        &self.buffer
    }

    #[must_use]
    pub fn guess_text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Scored attempts, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[GuessAttempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.target.is_some()
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.win
    }

    #[must_use]
    pub const fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        match (self.finished, self.win) {
            (false, _) => RoundStatus::InProgress,
            (true, true) => RoundStatus::Won,
            (true, false) => RoundStatus::Lost,
        }
    }

    /// Spoiler-free result grid, e.g. `3/6` followed by one emoji row per guess
    ///
    /// `None` until the round is finished.
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        if !self.finished {
            return None;
        }

        let score = if self.win {
            self.attempts.len().to_string()
        } else {
            "X".to_string()
        };

        let mut text = format!("{score}/{MAX_ATTEMPTS}");
        for attempt in &self.attempts {
            let row: String = attempt.scored_letters().map(|(_, s)| s.emoji()).collect();
            let _ = write!(text, "\n{row}");
        }
        Some(text)
    }
}

/// Uppercase a single letter, keeping it as typed when the uppercase form is
/// more than one character (e.g. `ß`)
fn uppercase_letter(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState::{Absent, Correct, Present};

    fn started(target: &str) -> RoundState {
        let mut round = RoundState::new();
        round.start(TargetWord::new(target).unwrap());
        round
    }

    fn type_word(round: &mut RoundState, word: &str) {
        for ch in word.chars() {
            round.type_letter(ch);
        }
    }

    fn guess(round: &mut RoundState, word: &str) -> Vec<RoundEvent> {
        type_word(round, word);
        round.submit_guess()
    }

    #[test]
    fn typing_uppercases_and_reports_buffer() {
        let mut round = started("crane");
        assert_eq!(
            round.type_letter('t'),
            vec![RoundEvent::GuessUpdated {
                attempt: 0,
                text: "T".to_string(),
            }]
        );
        assert_eq!(round.guess_buffer(), &['T']);
    }

    #[test]
    fn typing_ignores_non_letters_and_overflow() {
        let mut round = started("crane");
        assert!(round.type_letter('3').is_empty());
        assert!(round.type_letter(' ').is_empty());

        type_word(&mut round, "trace");
        assert!(round.type_letter('x').is_empty());
        assert_eq!(round.guess_text(), "TRACE");
    }

    #[test]
    fn idle_round_ignores_everything() {
        let mut round = RoundState::new();
        assert!(round.type_letter('a').is_empty());
        assert!(round.delete_letter().is_empty());
        assert!(round.submit_guess().is_empty());
        assert!(!round.is_started());
    }

    #[test]
    fn delete_on_empty_buffer_is_noop() {
        let mut round = started("crane");
        assert!(round.delete_letter().is_empty());

        round.type_letter('a');
        assert_eq!(
            round.delete_letter(),
            vec![RoundEvent::GuessUpdated {
                attempt: 0,
                text: String::new(),
            }]
        );
    }

    #[test]
    fn short_guess_is_rejected_and_kept() {
        let mut round = started("crane");
        let events = guess(&mut round, "cra");

        assert_eq!(
            events,
            vec![RoundEvent::GuessValidationFailed(
                GuessValidationError::WrongLength {
                    expected: 5,
                    actual: 3,
                }
            )]
        );
        assert_eq!(round.guess_text(), "CRA");
        assert_eq!(round.current_attempt(), 0);
        assert!(round.attempts().is_empty());
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut round = RoundState::new().with_validator(Arc::new(|w: &str| w == "CRANE"));
        round.start(TargetWord::new("crane").unwrap());

        let events = guess(&mut round, "xxxxx");
        assert_eq!(
            events,
            vec![RoundEvent::GuessValidationFailed(
                GuessValidationError::NotInWordList
            )]
        );
        assert_eq!(round.guess_text(), "XXXXX");
        assert_eq!(round.current_attempt(), 0);
    }

    #[test]
    fn target_missing_from_word_list_can_still_win() {
        let mut round = RoundState::new().with_validator(Arc::new(|w: &str| w == "SLATE"));
        round.start(TargetWord::new("crane").unwrap());

        let events = guess(&mut round, "crane");
        assert_eq!(events.last(), Some(&RoundEvent::GameFinished { is_win: true }));
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn degraded_mode_accepts_any_sized_guess() {
        let mut round = started("crane");
        assert!(!round.has_validator());

        let events = guess(&mut round, "qqqqq");
        assert!(matches!(events[0], RoundEvent::GuessEvaluated { .. }));
        assert_eq!(round.current_attempt(), 1);
    }

    #[test]
    fn accepted_guess_is_scored_and_advances() {
        let mut round = started("crane");
        let events = guess(&mut round, "trace");

        assert_eq!(
            events,
            vec![RoundEvent::GuessEvaluated {
                attempt: 0,
                letters: vec!['T', 'R', 'A', 'C', 'E'],
                states: vec![Absent, Correct, Correct, Present, Correct],
            }]
        );
        assert_eq!(round.current_attempt(), 1);
        assert!(round.guess_buffer().is_empty());
        assert_eq!(round.attempts().len(), 1);
        assert_eq!(round.status(), RoundStatus::InProgress);
    }

    #[test]
    fn win_on_first_guess() {
        let mut round = started("crane");
        let events = guess(&mut round, "crane");

        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], RoundEvent::GuessEvaluated { attempt: 0, .. }));
        assert_eq!(events[1], RoundEvent::GameFinished { is_win: true });
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn win_on_last_guess() {
        let mut round = started("crane");
        for _ in 0..MAX_ATTEMPTS - 1 {
            guess(&mut round, "slate");
        }
        let events = guess(&mut round, "crane");

        assert_eq!(events.last(), Some(&RoundEvent::GameFinished { is_win: true }));
        assert!(round.is_win());
        assert_eq!(round.attempts().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn loss_after_exactly_max_attempts() {
        let mut round = started("crane");
        for n in 0..MAX_ATTEMPTS - 1 {
            let events = guess(&mut round, "slate");
            assert_eq!(events.len(), 1, "attempt {n} should not finish");
        }

        let events = guess(&mut round, "slate");
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            RoundEvent::GuessEvaluated { attempt: 5, .. }
        ));
        assert_eq!(events[1], RoundEvent::GameFinished { is_win: false });
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.current_attempt(), MAX_ATTEMPTS);
        assert!(round.guess_buffer().is_empty());
    }

    #[test]
    fn finished_round_ignores_input() {
        let mut round = started("crane");
        guess(&mut round, "crane");

        assert!(round.type_letter('a').is_empty());
        assert!(round.delete_letter().is_empty());
        assert!(round.submit_guess().is_empty());
        assert_eq!(round.attempts().len(), 1);
    }

    #[test]
    fn restart_clears_progress() {
        let mut round = started("crane");
        guess(&mut round, "crane");

        round.start(TargetWord::new("slate").unwrap());
        assert!(!round.is_finished());
        assert_eq!(round.current_attempt(), 0);
        assert!(round.attempts().is_empty());
        assert_eq!(round.target().map(TargetWord::text), Some("SLATE"));
    }

    #[test]
    fn six_letter_round() {
        let mut round = started("planet");
        assert_eq!(
            guess(&mut round, "plane"),
            vec![RoundEvent::GuessValidationFailed(
                GuessValidationError::WrongLength {
                    expected: 6,
                    actual: 5,
                }
            )]
        );

        let events = guess(&mut round, "t");
        assert_eq!(events.last(), Some(&RoundEvent::GameFinished { is_win: true }));
    }

    #[test]
    fn share_text_after_finish() {
        let mut round = started("crane");
        assert_eq!(round.share_text(), None);

        guess(&mut round, "trace");
        guess(&mut round, "crane");

        assert_eq!(round.share_text().unwrap(), "2/6\n⬛🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn uppercase_keeps_multi_char_forms() {
        assert_eq!(uppercase_letter('ż'), 'Ż');
        assert_eq!(uppercase_letter('ß'), 'ß');
    }
}

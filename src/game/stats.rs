//! Per-session results

use super::round::RoundState;
use crate::core::MAX_ATTEMPTS;

/// Win/loss tally for the rounds played in one session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub played: usize,
    pub won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// Wins by number of guesses; index 0 is a win on the first guess
    pub distribution: [usize; MAX_ATTEMPTS],
}

impl SessionStats {
    /// Count a finished round; unfinished rounds are ignored
    pub fn record(&mut self, round: &RoundState) {
        if !round.is_finished() {
            return;
        }

        self.played += 1;
        if round.is_win() {
            self.won += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
            if let Some(slot) = round
                .attempts()
                .len()
                .checked_sub(1)
                .and_then(|i| self.distribution.get_mut(i))
            {
                *slot += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of rounds won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

//! Game flow: the round state machine, keyboard tinting and round setup

pub mod keyboard;
pub mod orchestrator;
pub mod round;
pub mod stats;

pub use keyboard::{Key, KeyboardAggregate, KeyboardLayout};
pub use orchestrator::{DEFAULT_DAILY_TIMEOUT, Orchestrator, StartedRound, TargetSource};
pub use round::{RoundEvent, RoundState, RoundStatus};
pub use stats::SessionStats;

//! Yet another Wordle
//!
//! A word-guessing game: six attempts to find a hidden word, with every guess
//! scored letter by letter. The game logic is plain synchronous code; the only
//! async step is picking the word of the day.
//!
//! # Quick Start
//!
//! ```rust
//! use yawordle::core::{LetterState, TargetWord};
//! use yawordle::game::{RoundEvent, RoundState};
//!
//! let mut round = RoundState::new();
//! round.start(TargetWord::new("crane").unwrap());
//!
//! for letter in "trace".chars() {
//!     round.type_letter(letter);
//! }
//! let events = round.submit_guess();
//!
//! assert!(matches!(
//!     &events[0],
//!     RoundEvent::GuessEvaluated { states, .. } if states[1] == LetterState::Correct
//! ));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Round state machine, keyboard and round setup
pub mod game;

// Persisted settings
pub mod settings;

// Tracing setup
pub mod logging;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Terminal output formatting
//!
//! Colored tiles, keyboards and result summaries for the line-based modes.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_settings};

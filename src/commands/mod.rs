//! Command implementations

pub mod check;
pub mod settings;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use settings::{SettingsUpdate, set_settings, show_settings};
pub use simple::run_simple;

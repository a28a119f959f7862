//! Tracing setup for the binary
//!
//! `RUST_LOG` wins when set; otherwise the `-v` count picks the level.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for a `-v` count
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "yawordle=warn",
        1 => "yawordle=info",
        _ => "yawordle=debug",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Log to stderr, for the line-based commands
pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter(verbosity))
        .init();
}

/// Log to a file, for the TUI where stderr would corrupt the screen
///
/// # Errors
/// Returns an error if the log file or its directory cannot be created.
pub fn init_file_tracing(path: &Path, verbosity: u8) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(env_filter(verbosity))
        .init();

    tracing::info!(path = %path.display(), "logging to file");
    Ok(())
}

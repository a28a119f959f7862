//! Yawordle - CLI
//!
//! Word-guessing game with a TUI and a plain line mode.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Runtime;
use yawordle::{
    commands::{SettingsUpdate, check_guess, run_simple, set_settings, show_settings},
    game::Orchestrator,
    logging::{init_file_tracing, init_tracing},
    output::print_check_result,
    settings::{GameMode, SettingsRecord, SettingsStore},
    wordlists::{
        DateSeededDaily, DirectoryWordLists, EmbeddedWordLists, LayeredWordLists,
        WordListSource, WordStore,
    },
};

#[derive(Parser)]
#[command(
    name = "yawordle",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language code of the word lists, e.g. en or pl
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Number of letters in the word
    #[arg(short = 'n', long, global = true)]
    length: Option<usize>,

    /// unlimited (random words) or daily (word of the day)
    #[arg(short, long, global = true, value_enum)]
    mode: Option<GameMode>,

    /// Directory with {solutions|guesses}_<lang>_<len>.txt lists overriding the built-in ones
    #[arg(short = 'w', long, global = true)]
    words_dir: Option<PathBuf>,

    /// Settings file (default: <config dir>/yawordle/settings.json)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// More logging (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Score one guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,

        /// Skip the word list lookup
        #[arg(long)]
        no_lookup: bool,
    },

    /// Show or change the saved settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the saved settings (default)
    Show,

    /// Save --language, --length and --mode as the new defaults
    Set {
        /// Mark the how-to-play screen as seen (or not)
        #[arg(long)]
        seen_instructions: Option<bool>,
    },
}

fn main() -> Result<()> {
    let Cli {
        command,
        language,
        length,
        mode,
        words_dir,
        settings,
        verbose,
    } = Cli::parse();

    // Default to Play mode if no command given
    let command = command.unwrap_or(Commands::Play);

    if matches!(command, Commands::Play) {
        let log_path = log_file_path();
        init_file_tracing(&log_path, verbose)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    } else {
        init_tracing(verbose);
    }

    let store = settings_store(settings)?;
    let overrides = SettingsUpdate {
        language,
        mode,
        word_length: length,
        has_seen_instructions: None,
    };

    match command {
        Commands::Settings { action } => match action.unwrap_or(SettingsAction::Show) {
            SettingsAction::Show => show_settings(&store),
            SettingsAction::Set { seen_instructions } => {
                let update = SettingsUpdate {
                    has_seen_instructions: seen_instructions,
                    ..overrides
                };
                set_settings(&store, &update).map(|_| ())
            }
        },
        Commands::Check {
            guess,
            target,
            no_lookup,
        } => {
            let settings = effective_settings(&store, &overrides)?;
            run_check_command(&guess, &target, no_lookup, &settings, words_dir.as_deref())
        }
        Commands::Play => {
            let settings = effective_settings(&store, &overrides)?;
            run_play_command(settings, store, words_dir.as_deref())
        }
        Commands::Simple => {
            let settings = effective_settings(&store, &overrides)?;
            run_simple_command(&settings, words_dir.as_deref())
        }
    }
}

fn settings_store(path: Option<PathBuf>) -> Result<SettingsStore> {
    let path = path
        .or_else(SettingsStore::default_path)
        .context("no config directory found; pass --settings <file>")?;
    Ok(SettingsStore::new(path))
}

/// Saved settings with this run's command-line values on top
fn effective_settings(store: &SettingsStore, overrides: &SettingsUpdate) -> Result<SettingsRecord> {
    let mut settings = store.load().context("failed to load settings")?;
    overrides.apply(&mut settings)?;
    Ok(settings)
}

fn log_file_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("yawordle")
        .join("yawordle.log")
}

/// Built-in lists, optionally overridden per list by a directory
fn word_source(words_dir: Option<&Path>) -> Arc<dyn WordListSource + Send + Sync> {
    match words_dir {
        Some(dir) => Arc::new(LayeredWordLists::new(vec![
            Box::new(DirectoryWordLists::new(dir)),
            Box::new(EmbeddedWordLists),
        ])),
        None => Arc::new(EmbeddedWordLists),
    }
}

fn orchestrator(words_dir: Option<&Path>) -> Orchestrator<DateSeededDaily> {
    let source = word_source(words_dir);
    Orchestrator::new(
        WordStore::new(Arc::clone(&source)),
        DateSeededDaily::new(source),
    )
}

fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")
}

fn run_check_command(
    guess: &str,
    target: &str,
    no_lookup: bool,
    settings: &SettingsRecord,
    words_dir: Option<&Path>,
) -> Result<()> {
    let mut store = WordStore::new(word_source(words_dir));
    let lookup = (!no_lookup).then_some((&mut store, settings.language.as_str()));

    let result = check_guess(guess, target, lookup)?;
    print_check_result(&result);
    Ok(())
}

fn run_simple_command(settings: &SettingsRecord, words_dir: Option<&Path>) -> Result<()> {
    let runtime = runtime()?;
    let mut orchestrator = orchestrator(words_dir);
    run_simple(&runtime, &mut orchestrator, settings)
}

fn run_play_command(
    settings: SettingsRecord,
    store: SettingsStore,
    words_dir: Option<&Path>,
) -> Result<()> {
    use yawordle::interactive::{App, run_tui};

    let runtime = runtime()?;
    let app = App::new(orchestrator(words_dir), settings, Some(store));
    run_tui(app, &runtime)
}

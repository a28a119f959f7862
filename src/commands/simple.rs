//! Simple line-based game mode
//!
//! Plays rounds without the TUI: one guess per line, colored tiles and the
//! tinted keyboard printed after every accepted guess.

use crate::core::MAX_ATTEMPTS;
use crate::game::{
    KeyboardAggregate, KeyboardLayout, Orchestrator, RoundEvent, RoundState, SessionStats,
    TargetSource,
};
use crate::output::display::{print_keyboard, print_round_result, print_validation_error};
use crate::output::formatters::tiles;
use crate::settings::SettingsRecord;
use crate::wordlists::WordOfTheDay;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tokio::runtime::Runtime;
use tracing::info;

/// What the player typed on one line
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Quit,
    NewRound,
    Guess(String),
    Blank,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_lowercase().as_str() {
        "" => Input::Blank,
        ":q" | ":quit" => Input::Quit,
        ":n" | ":new" => Input::NewRound,
        _ => Input::Guess(line.to_string()),
    }
}

/// Run the line mode on stdin/stdout
///
/// # Errors
///
/// Returns an error on I/O failure or when no target word can be chosen for
/// the configured language and length.
pub fn run_simple<D: WordOfTheDay>(
    runtime: &Runtime,
    orchestrator: &mut Orchestrator<D>,
    settings: &SettingsRecord,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(runtime, orchestrator, settings, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Play rounds until the input ends or the player quits
///
/// Returns the tally of finished rounds.
///
/// # Errors
///
/// Returns an error on I/O failure or when no target can be chosen.
pub fn play<D, R, W>(
    runtime: &Runtime,
    orchestrator: &mut Orchestrator<D>,
    settings: &SettingsRecord,
    mut input: R,
    mut out: W,
) -> Result<SessionStats>
where
    D: WordOfTheDay,
    R: BufRead,
    W: Write,
{
    let layout = KeyboardLayout::for_language(&settings.language);
    let mut stats = SessionStats::default();

    print_banner(&mut out, settings)?;

    'rounds: loop {
        let started = runtime
            .block_on(orchestrator.start_round(settings))
            .context("could not start a round")?;
        let mut round = started.round;
        let mut keyboard = KeyboardAggregate::new();
        let length = round.word_length().unwrap_or(settings.word_length);

        if started.source == TargetSource::Daily {
            writeln!(out, "{}", "Word of the day".bright_cyan().bold())?;
        }
        if !round.has_validator() {
            writeln!(
                out,
                "{}",
                "No word list for this setup; any word of the right length is accepted."
                    .yellow()
            )?;
        }
        writeln!(out, "Guess the {length}-letter word in {MAX_ATTEMPTS} tries.\n")?;

        loop {
            write!(
                out,
                "Guess {}/{}: ",
                round.current_attempt() + 1,
                round.max_attempts()
            )?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break 'rounds;
            }

            let guess = match parse_input(&line) {
                Input::Blank => continue,
                Input::Quit => break 'rounds,
                Input::NewRound => {
                    if let Some(target) = round.target() {
                        writeln!(out, "The word was {}\n", target.text().bold())?;
                    }
                    continue 'rounds;
                }
                Input::Guess(guess) => guess,
            };

            if !guess.chars().all(char::is_alphabetic) {
                writeln!(out, "  {}", "Use letters only.".red())?;
                continue;
            }

            let events = submit_line(&mut round, &guess);
            for event in &events {
                keyboard.apply(event);
                match event {
                    RoundEvent::GuessEvaluated {
                        letters, states, ..
                    } => {
                        writeln!(out, "  {}", tiles(letters, states))?;
                    }
                    RoundEvent::GuessValidationFailed(error) => {
                        print_validation_error(&mut out, error)?;
                    }
                    RoundEvent::GuessUpdated { .. } | RoundEvent::GameFinished { .. } => {}
                }
            }

            if round.is_finished() {
                stats.record(&round);
                info!(win = round.is_win(), attempts = round.attempts().len(), "round over");
                print_round_result(&mut out, &round, &stats)?;

                write!(out, "Play again? [y/N] ")?;
                out.flush()?;
                let mut answer = String::new();
                input.read_line(&mut answer)?;
                if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                    writeln!(out)?;
                    continue 'rounds;
                }
                break 'rounds;
            }

            if events
                .iter()
                .any(|event| matches!(event, RoundEvent::GuessEvaluated { .. }))
            {
                print_keyboard(&mut out, &layout, &keyboard)?;
            }
        }
    }

    writeln!(out, "Thanks for playing!")?;
    Ok(stats)
}

/// Feed a whole line into the round as one guess
///
/// Too-long input is rejected up front, since typing past the word length is
/// silently ignored by the round. A rejected guess leaves the buffer empty for
/// the next line.
fn submit_line(round: &mut RoundState, guess: &str) -> Vec<RoundEvent> {
    let Some(length) = round.word_length() else {
        return Vec::new();
    };

    while !round.delete_letter().is_empty() {}

    let actual = guess.chars().count();
    if actual > length {
        return vec![RoundEvent::GuessValidationFailed(
            crate::error::GuessValidationError::WrongLength {
                expected: length,
                actual,
            },
        )];
    }

    let mut events = Vec::new();
    for letter in guess.chars() {
        events.extend(round.type_letter(letter));
    }
    events.extend(round.submit_guess());

    if !round.is_finished() {
        while !round.delete_letter().is_empty() {}
    }
    events
}

fn print_banner(out: &mut impl Write, settings: &SettingsRecord) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(48).bright_cyan())?;
    writeln!(
        out,
        "  {}  {} | {} letters | {}",
        "YAWORDLE".bright_green().bold(),
        settings.language,
        settings.word_length,
        settings.mode
    )?;
    writeln!(out, "{}", "═".repeat(48).bright_cyan())?;
    writeln!(out, "Type a word and press Enter. :new skips the word, :quit exits.\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DailyWordError;
    use crate::wordlists::{WordListRole, WordListSource, WordStore};
    use std::future::Future;

    struct Lists;

    impl WordListSource for Lists {
        fn load(&self, language: &str, length: usize, role: WordListRole) -> Option<String> {
            match (language, length, role) {
                ("en", 5, WordListRole::Solutions) => Some("crane".to_string()),
                ("en", 5, WordListRole::Guesses) => Some("slate trace".to_string()),
                _ => None,
            }
        }
    }

    struct NoDaily;

    impl WordOfTheDay for NoDaily {
        fn word_of_the_day(
            &self,
            _language: &str,
            _length: usize,
        ) -> impl Future<Output = Result<Option<String>, DailyWordError>> + Send {
            async { Ok(None) }
        }
    }

    fn run(lines: &str) -> (SessionStats, String) {
        colored::control::set_override(false);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let mut orchestrator = Orchestrator::new(WordStore::with_seed(Lists, 1), NoDaily);
        let mut out = Vec::new();

        let stats = play(
            &runtime,
            &mut orchestrator,
            &SettingsRecord::default(),
            lines.as_bytes(),
            &mut out,
        )
        .unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_input("  :Q \n"), Input::Quit);
        assert_eq!(parse_input(":new"), Input::NewRound);
        assert_eq!(parse_input("\n"), Input::Blank);
        assert_eq!(parse_input(" crane\n"), Input::Guess("crane".to_string()));
    }

    #[test]
    fn winning_round() {
        let (stats, out) = run("trace\ncrane\nn\n");

        assert_eq!(stats.played, 1);
        assert_eq!(stats.won, 1);
        assert_eq!(stats.distribution[1], 1);
        assert!(out.contains("2/6"));
        assert!(out.contains("Thanks for playing!"));
    }

    #[test]
    fn rejected_guesses_do_not_use_attempts() {
        let (stats, out) = run("cranes\nzzzzz\ncr\ncrane\nn\n");

        assert_eq!(stats.distribution[0], 1);
        assert!(out.contains("expected 5"));
        assert!(out.contains("not in word list"));
    }

    #[test]
    fn losing_round_reveals_word() {
        let (stats, out) = run("slate\nslate\nslate\nslate\nslate\nslate\n");

        assert_eq!(stats.played, 1);
        assert_eq!(stats.won, 0);
        assert!(out.contains("CRANE"));
    }

    #[test]
    fn non_letters_are_rejected_whole() {
        let (stats, out) = run("cr-ne\ncrane\nn\n");

        assert!(out.contains("Use letters only."));
        assert!(!out.contains("expected 5"));
        assert_eq!(stats.distribution[0], 1);
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let (stats, _) = run("slate\n");
        assert_eq!(stats.played, 0);
    }

    #[test]
    fn submit_line_rejects_long_input() {
        let mut round = RoundState::new();
        round.start(crate::core::TargetWord::new("crane").unwrap());

        let events = submit_line(&mut round, "cranes");
        assert_eq!(
            events,
            vec![RoundEvent::GuessValidationFailed(
                crate::error::GuessValidationError::WrongLength {
                    expected: 5,
                    actual: 6,
                }
            )]
        );
        assert!(round.guess_buffer().is_empty());
    }
}

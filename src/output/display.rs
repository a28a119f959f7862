//! Display functions for game and command results

use super::formatters::{create_progress_bar, states_to_emoji, tile, tiles};
use crate::commands::CheckResult;
use crate::core::LetterState;
use crate::error::GuessValidationError;
use crate::game::{Key, KeyboardAggregate, KeyboardLayout, RoundState, SessionStats};
use crate::settings::SettingsRecord;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

pub fn print_validation_error(out: &mut impl Write, error: &GuessValidationError) -> io::Result<()> {
    writeln!(out, "  {}", format!("✗ {error}").red())
}

/// Keyboard rows tinted by what is known about each letter
pub fn print_keyboard(
    out: &mut impl Write,
    layout: &KeyboardLayout,
    keyboard: &KeyboardAggregate,
) -> io::Result<()> {
    writeln!(out)?;
    for (i, row) in layout.rows().iter().enumerate() {
        let keys: String = row
            .iter()
            .filter_map(|key| match key {
                Key::Letter(letter) => Some(*letter),
                Key::Enter | Key::Backspace => None,
            })
            .map(|letter| match keyboard.state_of(letter) {
                LetterState::Empty => format!(" {letter} "),
                state => tile(letter, state).to_string(),
            })
            .collect();
        writeln!(out, "  {}{keys}", " ".repeat(i))?;
    }
    writeln!(out)
}

/// Banner, revealed word, share grid and session tally after a round ends
pub fn print_round_result(
    out: &mut impl Write,
    round: &RoundState,
    stats: &SessionStats,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(48).cyan())?;
    if round.is_win() {
        let praise = match round.attempts().len() {
            1 => "Hole in one!",
            2 => "Magnificent!",
            3 => "Splendid!",
            4 => "Great!",
            5 => "Nice!",
            _ => "Phew!",
        };
        writeln!(out, "  {}", praise.bright_green().bold())?;
    } else {
        writeln!(out, "  {}", "Out of guesses.".red().bold())?;
    }

    if let Some(target) = round.target() {
        writeln!(out, "  The word was {}", target.text().bright_yellow().bold())?;
    }

    if let Some(share) = round.share_text() {
        writeln!(out)?;
        for line in share.lines() {
            writeln!(out, "  {line}")?;
        }
    }

    writeln!(out)?;
    print_statistics(out, stats)?;
    writeln!(out, "{}", "─".repeat(48).cyan())
}

/// Session tally with a bar per guess count
pub fn print_statistics(out: &mut impl Write, stats: &SessionStats) -> io::Result<()> {
    writeln!(
        out,
        "  Played {} | Win rate {:.0}% | Streak {} (best {})",
        stats.played,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    )?;

    let most = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "  {}: {} {count}", i + 1, bar.green())?;
    }
    Ok(())
}

/// Print the result of scoring one guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(48).cyan());
    println!(
        " {} {} against {}",
        "CHECK".bright_cyan().bold(),
        result.guess.bright_yellow().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "═".repeat(48).cyan());

    let letters: Vec<char> = result.guess.chars().collect();
    println!("\n   {}", tiles(&letters, result.feedback.states()));
    println!("   {}", states_to_emoji(result.feedback.states()));
    println!(
        "\n   Correct: {}  Present: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );

    match result.in_word_list {
        Some(true) => println!("   {}", "In word list".green()),
        Some(false) => println!("   {}", "Not in word list".red()),
        None => {}
    }
}

/// Print the settings record and where it lives
pub fn print_settings(settings: &SettingsRecord, path: &Path) {
    println!("{}", "Settings".bright_cyan().bold());
    println!("  file:                {}", path.display());
    println!("  language:            {}", settings.language);
    println!("  mode:                {}", settings.mode);
    println!("  word length:         {}", settings.word_length);
    println!("  seen instructions:   {}", settings.has_seen_instructions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TargetWord;

    #[test]
    fn keyboard_skips_action_keys() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_keyboard(
            &mut out,
            &KeyboardLayout::for_language("en"),
            &KeyboardAggregate::new(),
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" Q  W  E "));
        assert!(!text.contains('⏎'));
    }

    #[test]
    fn round_result_reveals_target() {
        colored::control::set_override(false);
        let mut round = RoundState::new();
        round.start(TargetWord::new("crane").unwrap());
        for ch in "crane".chars() {
            round.type_letter(ch);
        }
        round.submit_guess();

        let mut stats = SessionStats::default();
        stats.record(&round);

        let mut out = Vec::new();
        print_round_result(&mut out, &round, &stats).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Hole in one!"));
        assert!(text.contains("The word was CRANE"));
        assert!(text.contains("1/6"));
        assert!(text.contains("Win rate 100%"));
    }
}

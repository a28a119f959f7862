//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterState;
use crate::game::{Key, TargetSource};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D>(f: &mut Frame, app: &App<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                      // Header
            Constraint::Length(grid_height(app)),                       // Guess grid
            Constraint::Length(app.layout.rows().len() as u16 + 2),     // Keyboard
            Constraint::Min(4),                                         // Messages
            Constraint::Length(1),                                      // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.input_mode == InputMode::Instructions {
        render_instructions(f, f.area());
    }
}

fn grid_height<D>(app: &App<D>) -> u16 {
    app.round.max_attempts() as u16 + 2
}

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterState::Empty => Style::default().fg(Color::White),
    }
}

fn render_header<D>(f: &mut Frame, app: &App<D>, area: Rect) {
    let mode = match app.source {
        Some(TargetSource::Daily) => "daily",
        Some(TargetSource::Random) | None => "unlimited",
    };
    let title = format!(
        "YAWORDLE  {} | {} letters | {mode}",
        app.settings.language.to_uppercase(),
        app.round.word_length().unwrap_or(app.settings.word_length)
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// One line per attempt: scored rows, then the row being typed, then blanks
fn render_grid<D>(f: &mut Frame, app: &App<D>, area: Rect) {
    let round = &app.round;
    let length = round.word_length().unwrap_or(app.settings.word_length);

    let lines: Vec<Line> = (0..round.max_attempts())
        .map(|row| {
            if let Some(attempt) = round.attempts().get(row) {
                Line::from(
                    attempt
                        .scored_letters()
                        .map(|(letter, state)| Span::styled(format!(" {letter} "), tile_style(state)))
                        .collect::<Vec<_>>(),
                )
            } else if row == round.current_attempt() && !round.is_finished() {
                let typed = round.guess_buffer();
                Line::from(
                    (0..length)
                        .map(|i| match typed.get(i) {
                            Some(letter) => Span::styled(
                                format!("[{letter}]"),
                                Style::default()
                                    .fg(Color::Yellow)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            None => Span::styled("[ ]", Style::default().fg(Color::Gray)),
                        })
                        .collect::<Vec<_>>(),
                )
            } else {
                Line::from(Span::styled(
                    " · ".repeat(length),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard<D>(f: &mut Frame, app: &App<D>, area: Rect) {
    let lines: Vec<Line> = app
        .layout
        .rows()
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&key| {
                        let style = match key {
                            Key::Letter(letter) => tile_style(app.keyboard.state_of(letter)),
                            Key::Enter | Key::Backspace => Style::default().fg(Color::Cyan),
                        };
                        Span::styled(format!(" {} ", key.label()), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<D>(f: &mut Frame, app: &App<D>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<D>(f: &mut Frame, app: &App<D>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Played: {} | Win rate: {:.0}% | Streak: {}",
        app.stats.played,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "n: New word | q: Quit",
        InputMode::Playing | InputMode::Instructions => {
            "Enter: Submit | Backspace: Delete | Ctrl+N: Skip | Esc: Quit"
        }
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_instructions(f: &mut Frame, area: Rect) {
    let popup = centered(area, 60, 14);

    let example = |letter: char, state: LetterState| Span::styled(format!(" {letter} "), tile_style(state));
    let content = vec![
        Line::from("Guess the hidden word in 6 tries."),
        Line::from("Each guess must be a valid word of the right length."),
        Line::from(""),
        Line::from(vec![
            example('W', LetterState::Correct),
            Span::raw(" is in the word and in the right spot"),
        ]),
        Line::from(vec![
            example('I', LetterState::Present),
            Span::raw(" is in the word but in the wrong spot"),
        ]),
        Line::from(vec![
            example('U', LetterState::Absent),
            Span::raw(" is not in the word"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to start",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" How to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DailyWordError;
    use crate::game::Orchestrator;
    use crate::settings::SettingsRecord;
    use crate::wordlists::{EmbeddedWordLists, WordOfTheDay, WordStore};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use std::future::Future;

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

    fn screen_text<D>(app: &App<D>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 32)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_typed_letters_and_keyboard() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let orchestrator = Orchestrator::new(WordStore::with_seed(EmbeddedWordLists, 1), NoDaily);
        let settings = SettingsRecord {
            has_seen_instructions: true,
            ..SettingsRecord::default()
        };
        let mut app = App::new(orchestrator, settings, None);
        app.start_round(&runtime).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));

        let text = screen_text(&app);
        assert!(text.contains("[X]"));
        assert!(text.contains(" Keyboard "));
        assert!(!text.contains("How to play"));
    }

    #[test]
    fn draws_instructions_on_first_launch() {
        let orchestrator = Orchestrator::new(WordStore::with_seed(EmbeddedWordLists, 1), NoDaily);
        let app = App::new(orchestrator, SettingsRecord::default(), None);

        assert!(screen_text(&app).contains("How to play"));
    }

    #[test]
    fn centered_clips_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 60, 14), area);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
    }
}

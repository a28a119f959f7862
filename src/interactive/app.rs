//! TUI application state and logic

use crate::game::{
    KeyboardAggregate, KeyboardLayout, Orchestrator, RoundEvent, RoundState, SessionStats,
    TargetSource,
};
use crate::settings::{SettingsRecord, SettingsStore};
use crate::wordlists::WordOfTheDay;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::runtime::Runtime;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// How-to-play screen shown on first launch
    Instructions,
    Playing,
    RoundOver,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    NewRound,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<D> {
    orchestrator: Orchestrator<D>,
    settings_store: Option<SettingsStore>,
    pub settings: SettingsRecord,
    pub round: RoundState,
    pub source: Option<TargetSource>,
    pub keyboard: KeyboardAggregate,
    pub layout: KeyboardLayout,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

impl<D: WordOfTheDay> App<D> {
    /// `settings_store` is where the "instructions seen" flag is saved
    #[must_use]
    pub fn new(
        orchestrator: Orchestrator<D>,
        settings: SettingsRecord,
        settings_store: Option<SettingsStore>,
    ) -> Self {
        let input_mode = if settings.has_seen_instructions {
            InputMode::Playing
        } else {
            InputMode::Instructions
        };

        Self {
            orchestrator,
            settings_store,
            layout: KeyboardLayout::for_language(&settings.language),
            settings,
            round: RoundState::new(),
            source: None,
            keyboard: KeyboardAggregate::new(),
            messages: Vec::new(),
            stats: SessionStats::default(),
            input_mode,
            should_quit: false,
        }
    }

    /// Pick a target and replace the current round
    ///
    /// # Errors
    /// Returns an error when no target word is available.
    pub fn start_round(&mut self, runtime: &Runtime) -> Result<()> {
        let started = runtime.block_on(self.orchestrator.start_round(&self.settings))?;

        self.round = started.round;
        self.source = Some(started.source);
        self.keyboard.reset();
        self.messages.clear();

        if self.input_mode == InputMode::RoundOver {
            self.input_mode = InputMode::Playing;
        }

        let intro = match started.source {
            TargetSource::Daily => "Word of the day. Good luck!",
            TargetSource::Random => "New word. Good luck!",
        };
        self.add_message(intro, MessageStyle::Info);
        if !self.round.has_validator() {
            self.add_message(
                "No word list for this setup: any word is accepted",
                MessageStyle::Error,
            );
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.input_mode {
            InputMode::Instructions => {
                self.dismiss_instructions();
                Action::None
            }
            InputMode::RoundOver => match key.code {
                KeyCode::Char('n' | 'N') | KeyCode::Enter => Action::NewRound,
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => Action::Quit,
                _ => Action::None,
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => Action::Quit,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Action::NewRound
                }
                KeyCode::Char(_)
                    if key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Action::None
                }
                KeyCode::Char(c) => {
                    let events = self.round.type_letter(c);
                    self.apply_events(&events);
                    Action::None
                }
                KeyCode::Backspace => {
                    let events = self.round.delete_letter();
                    self.apply_events(&events);
                    Action::None
                }
                KeyCode::Enter => {
                    let events = self.round.submit_guess();
                    self.apply_events(&events);
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    fn apply_events(&mut self, events: &[RoundEvent]) {
        for event in events {
            self.keyboard.apply(event);
            match event {
                RoundEvent::GuessValidationFailed(error) => {
                    self.add_message(&error.to_string(), MessageStyle::Error);
                }
                RoundEvent::GameFinished { is_win } => self.finish_round(*is_win),
                RoundEvent::GuessUpdated { .. } | RoundEvent::GuessEvaluated { .. } => {}
            }
        }
    }

    fn finish_round(&mut self, is_win: bool) {
        self.stats.record(&self.round);
        self.input_mode = InputMode::RoundOver;
        info!(is_win, attempts = self.round.attempts().len(), "round over");

        if is_win {
            let celebration = match self.round.attempts().len() {
                1 => "Hole in one!",
                2 => "Magnificent!",
                3 => "Splendid!",
                4 => "Great!",
                5 => "Nice!",
                _ => "Phew!",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else if let Some(target) = self.round.target() {
            let text = format!("The word was {}", target.text());
            self.add_message(&text, MessageStyle::Error);
        }
        self.add_message("Press 'n' for a new word or 'q' to quit", MessageStyle::Info);
    }

    fn dismiss_instructions(&mut self) {
        self.input_mode = InputMode::Playing;
        if self.settings.has_seen_instructions {
            return;
        }

        self.settings.has_seen_instructions = true;
        if let Some(store) = &self.settings_store {
            // Reload so per-run command-line overrides are not persisted
            let saved = store.load().and_then(|mut stored| {
                stored.has_seen_instructions = true;
                store.save(&stored)
            });
            if let Err(e) = saved {
                warn!(error = %e, "could not save settings");
                self.add_message("Could not save settings", MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if no round can be started.
pub fn run_tui<D: WordOfTheDay>(mut app: App<D>, runtime: &Runtime) -> Result<()> {
    app.start_round(runtime)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, D>(terminal: &mut Terminal<B>, app: &mut App<D>, runtime: &Runtime) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: WordOfTheDay,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.handle_key(key) {
                Action::None => {}
                Action::NewRound => {
                    if let Err(e) = app.start_round(runtime) {
                        warn!(error = %e, "could not start a round");
                        app.add_message(&e.to_string(), MessageStyle::Error);
                    }
                }
                Action::Quit => app.should_quit = true,
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! TUI application state and logic

use crate::core::SubmissionOutcome;
use crate::dictionary::Dictionary;
use crate::engine::GameEngine;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// A modal alert for a rejected submission
#[derive(Debug, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Application state
pub struct App<'a, D: Dictionary> {
    pub engine: GameEngine<'a, D>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub words_accepted: usize,
    pub best_score: u32,
}

impl<'a, D: Dictionary> App<'a, D> {
    #[must_use]
    pub fn new(engine: GameEngine<'a, D>) -> Self {
        Self {
            engine,
            input_buffer: String::new(),
            alert: None,
            messages: vec![
                Message {
                    text: "Welcome! Spell words from the root word above.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits, Ctrl+N starts a new game, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Typing,
        }
    }

    /// Submit the current input buffer to the engine
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.trim().is_empty() {
            return;
        }

        match self.engine.submit_word(&input) {
            SubmissionOutcome::Accepted { word, score_delta } => {
                self.stats.words_accepted += 1;
                if self.engine.score() > self.stats.best_score {
                    self.stats.best_score = self.engine.score();
                }
                let text = format!("'{word}' accepted, +{score_delta}");
                self.add_message(&text, MessageStyle::Success);
            }
            SubmissionOutcome::Rejected(reason) => {
                let alert = Alert {
                    title: reason.title().to_string(),
                    message: reason.message(self.engine.root_word()),
                };
                self.alert = Some(alert);
                self.input_mode = InputMode::Alert;
            }
        }
    }

    /// Dismiss the rejection alert and return to typing
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    /// Throw the session away and start on a fresh root word
    pub fn new_game(&mut self) {
        let restarted = self
            .engine
            .start_game()
            .map(str::to_uppercase)
            .map_err(|e| e.to_string());

        match restarted {
            Ok(root) => {
                self.stats.games_played += 1;
                self.input_buffer.clear();
                let text = format!("New game! Root word: {root}");
                self.add_message(&text, MessageStyle::Info);
            }
            Err(text) => self.add_message(&text, MessageStyle::Error),
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
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary>(app: App<'_, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Alert => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char(_) | KeyCode::Backspace => {
                        app.dismiss_alert();
                    }
                    _ => {}
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        if c.is_alphabetic() {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.submit_input();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

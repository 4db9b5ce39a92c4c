//! TUI application state and logic

use crate::core::{Combination, Level, Score};
use crate::solver::{Solver, StrategyType};
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

/// Application state
pub struct App {
    pub solver: Solver<StrategyType>,
    pub current_guess: Option<Combination>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    WinCelebration,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub total_guesses: usize,
}

impl Statistics {
    /// Mean guesses per won game
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl App {
    #[must_use]
    pub fn new(level: Level, strategy: StrategyType) -> Self {
        Self {
            solver: Solver::new(strategy, level),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Think of 4 distinct digits from 0 to {}. I'll guess them.",
                        level.max_digit()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Score each guess as 'right wrong' (e.g., '1 2')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        }
    }

    pub fn compute_suggestion(&mut self) {
        self.current_guess = self.solver.next_guess();

        if self.current_guess.is_none() {
            self.add_message("No combinations remaining!", MessageStyle::Error);
        }
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let Some(guess) = self.current_guess else {
            self.add_message("No guess to score. Press 'u' to undo.", MessageStyle::Error);
            return;
        };

        let score = match feedback.parse::<Score>() {
            Ok(score) => score,
            Err(e) => {
                self.add_message(&format!("Invalid score: {e}"), MessageStyle::Error);
                return;
            }
        };

        let candidates_after = self.solver.record(guess, score);
        self.input_buffer.clear();

        if score.is_perfect() {
            let guess_count = self.solver.history().len();
            self.stats.games_won += 1;
            self.stats.total_guesses += guess_count;
            self.input_mode = InputMode::WinCelebration;

            let celebration = match guess_count {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                2..=4 => format!("🔥 Got it in {guess_count}! 🔥"),
                _ => format!("🎉 Found {guess} in {guess_count} guesses! 🎉"),
            };

            self.add_message(&celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if candidates_after == 0 {
            self.current_guess = None;
            self.add_message(
                "No combinations remain - a score may be wrong. Press 'u' to undo.",
                MessageStyle::Error,
            );
        } else {
            self.compute_suggestion();
            self.add_message(
                &format!("{candidates_after} combinations remaining"),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        self.solver.reset();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! Think of a new combination.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if self.solver.undo() {
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
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

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.solver.remaining()
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    // Compute initial guess
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('n') => app.new_game(),
                _ if app.input_mode == InputMode::WinCelebration => {}
                KeyCode::Char('u') => app.undo_last(),
                KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' || c == ',' => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = app.input_buffer.clone();
                    app.handle_feedback(&input);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

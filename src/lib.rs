//! # vocab-quiz
//!
//! A single-screen multiple-choice vocabulary quiz for the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vocab_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // The built-in English to Thai question set
//!     let quiz = Quiz::builtin()?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod scoring;
mod session;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{App, OptionHighlight};
pub use data::{LoadError, builtin_questions, parse_questions};
pub use models::{Question, QuestionSet, QuestionSetError, QuizOption};
pub use scoring::{GradeBand, Results, ReviewEntry};
pub use session::{Phase, QuizSession};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question set could not be loaded.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a validated question set.
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            app: App::new(questions),
        }
    }

    /// Quiz over the question set compiled into the crate.
    pub fn builtin() -> Result<Self, QuizError> {
        Ok(Self::new(builtin_questions()?))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                tracing::info!("quit requested");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }

    match app.phase() {
        Phase::Answering | Phase::Reviewing => handle_quiz_input(app, key),
        Phase::Finished => handle_result_input(app, key),
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.select_option_at(digit as usize - 1);
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(builtin_questions().unwrap())
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(handle_input(&mut app, KeyCode::Char('q')));
        assert!(handle_input(&mut app, KeyCode::Esc));
        assert!(!handle_input(&mut app, KeyCode::Enter));
    }

    #[test]
    fn test_keyboard_run_through_quiz() {
        let mut app = app();
        for key in [
            KeyCode::Char('2'),
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Char('1'),
            KeyCode::Enter,
            KeyCode::Enter,
            KeyCode::Char('4'),
            KeyCode::Enter,
        ] {
            assert!(!handle_input(&mut app, key));
        }

        // Reviewing the last question: option keys are locked.
        handle_input(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session().selected_answer(), Some("4"));

        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.phase(), Phase::Finished);
        assert_eq!(app.results().map(|r| r.score), Some(2));

        handle_input(&mut app, KeyCode::Char('j'));
        assert_eq!(app.result_scroll(), 1);
        handle_input(&mut app, KeyCode::Char('r'));
        assert_eq!(app.phase(), Phase::Answering);
        assert_eq!(app.session(), &QuizSession::new());
    }

    #[test]
    fn test_enter_without_selection_does_not_submit() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.phase(), Phase::Answering);
        handle_input(&mut app, KeyCode::Char('0'));
        assert_eq!(app.session().selected_answer(), None);
    }

    #[test]
    fn test_quiz_exposes_app() {
        let mut quiz = Quiz::builtin().unwrap();
        quiz.app_mut().select_option("2");
        assert_eq!(quiz.app().session().selected_answer(), Some("2"));
    }

    #[test]
    fn test_error_display() {
        let err = QuizError::from(parse_questions("[]").unwrap_err());
        assert_eq!(
            err.to_string(),
            "failed to load questions: invalid question set: question set must contain at least one question"
        );
    }
}

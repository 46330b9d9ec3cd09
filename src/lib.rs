//! # quiz-deck
//!
//! A terminal multiple-choice quiz: questions are drawn at random from a
//! JSON question bank, answers are checked on the spot, and running
//! statistics and an answer history are kept for the session.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_deck::{Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("data/questions.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
pub mod data;
pub mod effects;
mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

pub use app::App;
pub use config::{AppSettings, Config};
pub use data::{QuestionBank, ValidationIssue, load_bank_from_json, parse_bank};
pub use error::{LoadError, QuizError, SessionError};
pub use models::{AnswerOption, AnsweredRecord, FeedbackState, Question, QuizMetadata, SessionStats};
pub use session::{QuizSession, SessionPhase};

/// Redraw rate while a celebration is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    bank: Arc<QuestionBank>,
    settings: AppSettings,
    seed: Option<u64>,
}

impl Quiz {
    /// Create a new quiz from a loaded question bank.
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
            settings: AppSettings::default(),
            seed: None,
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// Questions without exactly one matching answer are skipped.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_deck::Quiz;
    ///
    /// let quiz = Quiz::from_json("data/questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let bank = load_bank_from_json(path, false)?;
        Ok(Self::new(bank))
    }

    /// Build a quiz from command line / environment configuration.
    pub fn from_config(config: &Config) -> Result<Self, QuizError> {
        let bank = load_bank_from_json(&config.questions, config.strict)?;
        Ok(Self::new(bank)
            .with_settings(config.app_settings())
            .with_seed(config.seed))
    }

    pub fn with_settings(mut self, settings: AppSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Fix the random seed used for question selection.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Start a fresh session over this quiz's bank.
    pub fn session(&self) -> QuizSession {
        let bank = Arc::clone(&self.bank);
        match self.seed {
            Some(seed) => QuizSession::with_seed(bank, seed),
            None => QuizSession::new(bank),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits. Pending timers are cancelled before returning.
    pub async fn run(self) -> Result<(), QuizError> {
        let (feedback_tx, feedback_rx) = mpsc::unbounded_channel();
        let mut app = App::new(self.session(), self.settings, feedback_tx);

        let mut term = terminal::init()?;
        let size = term.size()?;
        app.resize(size.width, size.height);

        let result = run_event_loop(&mut term, &mut app, feedback_rx).await;

        app.shutdown();
        terminal::restore()?;
        result
    }
}

async fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
    mut feedback_rx: mpsc::UnboundedReceiver<session::FeedbackElapsed>,
) -> Result<(), QuizError> {
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit() {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => handle_event(app, event),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(elapsed) = feedback_rx.recv() => {
                if let Err(e) = app.on_feedback_elapsed(elapsed) {
                    tracing::error!("Failed to advance to the next question: {}", e);
                }
            }
            _ = frames.tick(), if app.celebration_active() => {
                app.on_frame(Instant::now());
            }
        }
    }

    Ok(())
}

fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_input(app, key.code),
        Event::Resize(width, height) => app.resize(width, height),
        _ => {}
    }
}

fn handle_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ if !app.session().is_ready() => {}
        KeyCode::Char('h') | KeyCode::Char('H') => app.toggle_history_view(),
        _ if app.session().history_visible() => {}
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => report(app.submit_cursor()),
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            if index < app.option_count() {
                report(app.select_answer(index));
            }
        }
        _ => {}
    }
}

fn report(result: Result<(), SessionError>) {
    if let Err(e) = result {
        tracing::error!("Answer rejected: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        let bank = parse_bank(
            r#"{"title": "T", "questions": [
                {"question": "Q", "options": ["A", "B", "C"], "answer": "B"}
            ]}"#,
        );
        Quiz::new(bank)
            .with_seed(Some(5))
            .with_settings(AppSettings {
                feedback_delay: Duration::from_secs(60),
                celebration_duration: Duration::from_millis(10),
            })
    }

    fn app(quiz: &Quiz) -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(quiz.session(), quiz.settings, tx)
    }

    #[test]
    fn test_quit_keys() {
        let quiz = quiz();
        for key in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            let mut app = app(&quiz);
            handle_input(&mut app, key);
            assert!(app.should_quit());
        }
    }

    #[tokio::test]
    async fn test_digit_selects_option() {
        let quiz = quiz();
        let mut app = app(&quiz);

        handle_input(&mut app, KeyCode::Char('2'));
        assert!(app.session().is_evaluating());
        assert_eq!(app.session().feedback().unwrap().selected_index, 1);

        // locked while evaluating
        handle_input(&mut app, KeyCode::Char('1'));
        assert_eq!(app.session().history().len(), 1);
        app.shutdown();
    }

    #[test]
    fn test_digit_out_of_range_is_ignored() {
        let quiz = quiz();
        let mut app = app(&quiz);
        handle_input(&mut app, KeyCode::Char('9'));
        assert!(!app.session().is_evaluating());
    }

    #[tokio::test]
    async fn test_enter_submits_cursor() {
        let quiz = quiz();
        let mut app = app(&quiz);

        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.session().feedback().unwrap().selected_index, 2);
        app.shutdown();
    }

    #[test]
    fn test_history_view_blocks_answers() {
        let quiz = quiz();
        let mut app = app(&quiz);

        handle_input(&mut app, KeyCode::Char('h'));
        assert!(app.session().history_visible());
        handle_input(&mut app, KeyCode::Enter);
        assert!(!app.session().is_evaluating());

        handle_input(&mut app, KeyCode::Char('h'));
        assert!(!app.session().history_visible());
    }

    #[test]
    fn test_empty_bank_only_quits() {
        let quiz = Quiz::new(QuestionBank::empty());
        let mut app = app(&quiz);

        handle_input(&mut app, KeyCode::Char('h'));
        assert!(!app.session().history_visible());
        handle_input(&mut app, KeyCode::Enter);
        assert!(!app.should_quit());
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let quiz = quiz();
        let mut app = app(&quiz);
        handle_event(&mut app, Event::Resize(120, 40));
        assert_eq!(app.viewport(), (120, 40));
    }

    #[test]
    fn test_from_json_missing_file() {
        assert!(matches!(
            Quiz::from_json("missing.json"),
            Err(QuizError::Load(LoadError::Io { .. }))
        ));
    }
}

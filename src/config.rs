use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Command line and environment configuration.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// JSON file to load the questions from
    #[arg(short, long, env = "QUIZ_QUESTIONS", default_value = "data/questions.json")]
    pub questions: PathBuf,

    /// How long answer feedback stays on screen, in milliseconds
    #[arg(long, env = "QUIZ_FEEDBACK_DELAY_MS", default_value_t = 1500)]
    pub feedback_delay_ms: u64,

    /// Length of the correct-answer celebration, in milliseconds
    #[arg(long, env = "QUIZ_CELEBRATION_MS", default_value_t = 2000)]
    pub celebration_ms: u64,

    /// Seed for question order, for reproducible runs
    #[arg(long, env = "QUIZ_SEED")]
    pub seed: Option<u64>,

    /// Refuse to start if any question fails validation
    #[arg(long, env = "QUIZ_STRICT")]
    pub strict: bool,

    /// Directory for the log file
    #[arg(long, env = "QUIZ_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log filter directive, e.g. `info` or `quiz_deck=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            feedback_delay: Duration::from_millis(self.feedback_delay_ms),
            celebration_duration: Duration::from_millis(self.celebration_ms),
        }
    }
}

/// Timings used by the running app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    pub feedback_delay: Duration,
    pub celebration_duration: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            feedback_delay: crate::session::DEFAULT_FEEDBACK_DELAY,
            celebration_duration: crate::effects::DEFAULT_CELEBRATION,
        }
    }
}

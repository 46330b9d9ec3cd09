//! Question selection, answer evaluation and feedback timing.

mod selector;
mod state;
mod timer;

pub use selector::{ActiveQuestion, select_next};
pub use state::{Evaluation, OptionState, QuizSession, SessionPhase, SubmitOutcome};
pub use timer::{DEFAULT_FEEDBACK_DELAY, FeedbackElapsed, FeedbackTimer};

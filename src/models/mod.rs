mod question;
mod record;

pub use question::{AnswerOption, Question, QuizMetadata};
pub use record::{AnsweredRecord, FeedbackState, SessionStats};

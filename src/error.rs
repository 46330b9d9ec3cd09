//! Error types for loading, session transitions and running the quiz.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::ValidationIssue;

/// Error loading a question document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed question document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{} question(s) failed validation, first: {}", .issues.len(), first_issue(.issues))]
    Invalid { issues: Vec<ValidationIssue> },
}

fn first_issue(issues: &[ValidationIssue]) -> String {
    issues
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

/// Rejected transition of a [`QuizSession`](crate::session::QuizSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("question bank is empty, nothing to select")]
    NotReady,

    #[error("answer index {index} out of range for {len} options")]
    AnswerOutOfRange { index: usize, len: usize },

    #[error("question {question_id} has no correct option")]
    MissingCorrectOption { question_id: usize },
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

use std::sync::Arc;

use thiserror::Error;

use crate::error::LoadError;
use crate::models::{AnswerOption, Question, QuizMetadata};

use super::raw::{RawQuestion, RawQuizDocument};

/// A problem found while converting a raw question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("question {id} has no options")]
    NoOptions { id: usize },

    #[error("question {id}: no option matches answer {answer:?}")]
    NoCorrectOption { id: usize, answer: String },

    #[error("question {id}: {matches} options match answer {answer:?}")]
    AmbiguousAnswer {
        id: usize,
        answer: String,
        matches: usize,
    },
}

impl ValidationIssue {
    pub fn question_id(&self) -> usize {
        match self {
            Self::NoOptions { id }
            | Self::NoCorrectOption { id, .. }
            | Self::AmbiguousAnswer { id, .. } => *id,
        }
    }
}

/// The immutable set of questions a session draws from.
///
/// An empty bank is "not ready": nothing can be selected from it.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    metadata: QuizMetadata,
    questions: Vec<Arc<Question>>,
    issues: Vec<ValidationIssue>,
}

impl QuestionBank {
    pub fn new(metadata: QuizMetadata, questions: Vec<Question>) -> Self {
        Self {
            metadata,
            questions: questions.into_iter().map(Arc::new).collect(),
            issues: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Convert a raw document, skipping questions that fail validation.
    pub fn from_document(document: RawQuizDocument) -> Self {
        let metadata = QuizMetadata {
            title: document.title,
            department: document.department,
            university: document.university,
            course: document.course,
        };

        let mut questions = Vec::with_capacity(document.questions.len());
        let mut issues = Vec::new();

        for (index, raw) in document.questions.into_iter().enumerate() {
            match convert_question(index, raw) {
                Ok(question) => questions.push(Arc::new(question)),
                Err(issue) => {
                    tracing::warn!("Skipping question: {}", issue);
                    issues.push(issue);
                }
            }
        }

        Self {
            metadata,
            questions,
            issues,
        }
    }

    /// Turn any validation issue into an error.
    pub fn into_strict(self) -> Result<Self, LoadError> {
        if self.issues.is_empty() {
            Ok(self)
        } else {
            Err(LoadError::Invalid {
                issues: self.issues,
            })
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Arc<Question>] {
        &self.questions
    }

    pub fn metadata(&self) -> &QuizMetadata {
        &self.metadata
    }

    /// Questions dropped during conversion.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

fn convert_question(index: usize, raw: RawQuestion) -> Result<Question, ValidationIssue> {
    let id = index + 1;

    if raw.options.is_empty() {
        return Err(ValidationIssue::NoOptions { id });
    }

    let matches = raw
        .options
        .iter()
        .filter(|option| **option == raw.answer)
        .count();

    match matches {
        1 => {}
        0 => {
            return Err(ValidationIssue::NoCorrectOption {
                id,
                answer: raw.answer,
            });
        }
        matches => {
            return Err(ValidationIssue::AmbiguousAnswer {
                id,
                answer: raw.answer,
                matches,
            });
        }
    }

    let options = raw
        .options
        .into_iter()
        .map(|text| {
            let is_correct = text == raw.answer;
            AnswerOption::new(text, is_correct)
        })
        .collect();

    Ok(Question::new(id, raw.question, options))
}

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::QuestionBank;
use crate::error::SessionError;
use crate::models::{AnswerOption, Question};

/// The question currently on screen, with its options in display order.
#[derive(Debug, Clone)]
pub struct ActiveQuestion {
    source: Arc<Question>,
    options: Vec<AnswerOption>,
}

impl ActiveQuestion {
    /// The question as loaded, in its original option order.
    pub fn source(&self) -> &Arc<Question> {
        &self.source
    }

    pub fn id(&self) -> usize {
        self.source.id
    }

    pub fn prompt(&self) -> &str {
        &self.source.prompt
    }

    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.is_correct)
    }
}

/// Pick a question uniformly at random (with replacement) and shuffle its options.
pub fn select_next<R: Rng + ?Sized>(
    bank: &QuestionBank,
    rng: &mut R,
) -> Result<ActiveQuestion, SessionError> {
    let source = bank
        .questions()
        .choose(rng)
        .ok_or(SessionError::NotReady)?;

    let mut options = source.options.clone();
    options.shuffle(rng);

    Ok(ActiveQuestion {
        source: Arc::clone(source),
        options,
    })
}

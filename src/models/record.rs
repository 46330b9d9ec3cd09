use std::sync::Arc;

use super::Question;

/// One submitted answer, kept for the history view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredRecord {
    /// The question as loaded, with its original option order.
    pub question: Arc<Question>,
    pub selected_text: String,
    pub was_correct: bool,
}

/// Running totals for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    total_answered: usize,
    total_correct: usize,
    percentage: u8,
}

impl SessionStats {
    pub fn total_answered(&self) -> usize {
        self.total_answered
    }

    pub fn total_correct(&self) -> usize {
        self.total_correct
    }

    /// Share of correct answers, rounded to the nearest whole percent.
    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn record(&mut self, was_correct: bool) {
        self.total_answered += 1;
        if was_correct {
            self.total_correct += 1;
        }
        self.percentage = rounded_percentage(self.total_correct, self.total_answered);
    }
}

/// `round(100 * correct / answered)` with halves rounded up, 0 for no answers.
fn rounded_percentage(correct: usize, answered: usize) -> u8 {
    if answered == 0 {
        return 0;
    }
    let rounded = (correct * 200 + answered) / (answered * 2);
    rounded.min(100) as u8
}

/// Feedback shown while an answer is being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackState {
    pub selected_index: usize,
    pub is_correct: bool,
    /// Position of the correct option, only set for a wrong answer.
    pub correct_index: Option<usize>,
}

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// A validated multiple-choice question.
///
/// Exactly one option is marked correct once a question made it into a
/// [`QuestionBank`](crate::data::QuestionBank).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 1-based position in the source document.
    pub id: usize,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: usize, prompt: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options,
        }
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.is_correct)
    }

    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.is_correct)
    }
}

/// Static information shown in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizMetadata {
    pub title: String,
    pub department: String,
    pub university: String,
    pub course: String,
}

impl QuizMetadata {
    /// Non-empty department/university/course parts, in display order.
    pub fn subtitle_parts(&self) -> Vec<&str> {
        [&self.department, &self.university, &self.course]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect()
    }
}

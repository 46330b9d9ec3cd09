//! The quiz session state machine.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data::QuestionBank;
use crate::error::SessionError;
use crate::models::{AnsweredRecord, FeedbackState, QuizMetadata, SessionStats};

use super::selector::{ActiveQuestion, select_next};

/// Where the session is in its answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The bank is empty; nothing can be shown.
    NotReady,
    /// A question is on screen and accepts an answer.
    Idle,
    /// An answer was submitted; input is locked until feedback ends.
    Evaluating(FeedbackState),
}

/// How a single option should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Unselected,
    SelectedCorrect,
    SelectedIncorrect,
    RevealedCorrect,
    Dimmed,
}

/// Result of evaluating a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub was_correct: bool,
    pub correct_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Evaluated(Evaluation),
    /// An answer for the current question was already recorded.
    Ignored,
}

/// Owns the active question, statistics and answer history.
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    rng: StdRng,
    phase: SessionPhase,
    active: Option<ActiveQuestion>,
    stats: SessionStats,
    history: Vec<AnsweredRecord>,
    history_visible: bool,
}

impl QuizSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self::with_rng(bank, StdRng::from_entropy())
    }

    pub fn with_seed(bank: Arc<QuestionBank>, seed: u64) -> Self {
        Self::with_rng(bank, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(bank: Arc<QuestionBank>, mut rng: StdRng) -> Self {
        let (phase, active) = match select_next(&bank, &mut rng) {
            Ok(active) => (SessionPhase::Idle, Some(active)),
            Err(_) => {
                tracing::warn!("Question bank is empty, session not ready");
                (SessionPhase::NotReady, None)
            }
        };

        Self {
            bank,
            rng,
            phase,
            active,
            stats: SessionStats::default(),
            history: Vec::new(),
            history_visible: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        !matches!(self.phase, SessionPhase::NotReady)
    }

    pub fn is_evaluating(&self) -> bool {
        matches!(self.phase, SessionPhase::Evaluating(_))
    }

    pub fn feedback(&self) -> Option<&FeedbackState> {
        match &self.phase {
            SessionPhase::Evaluating(feedback) => Some(feedback),
            _ => None,
        }
    }

    pub fn active_question(&self) -> Option<&ActiveQuestion> {
        self.active.as_ref()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Answers in submission order, oldest first.
    pub fn history(&self) -> &[AnsweredRecord] {
        &self.history
    }

    pub fn metadata(&self) -> &QuizMetadata {
        self.bank.metadata()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn history_visible(&self) -> bool {
        self.history_visible
    }

    pub fn toggle_history(&mut self) {
        self.history_visible = !self.history_visible;
    }

    /// Evaluate the option at `chosen_index` of the active question.
    ///
    /// While evaluating, further submissions are ignored. Errors leave the
    /// session untouched.
    pub fn submit_answer(&mut self, chosen_index: usize) -> Result<SubmitOutcome, SessionError> {
        match self.phase {
            SessionPhase::NotReady => return Err(SessionError::NotReady),
            SessionPhase::Evaluating(_) => return Ok(SubmitOutcome::Ignored),
            SessionPhase::Idle => {}
        }

        let active = self.active.as_ref().ok_or(SessionError::NotReady)?;
        let options = active.options();

        let option = options
            .get(chosen_index)
            .ok_or(SessionError::AnswerOutOfRange {
                index: chosen_index,
                len: options.len(),
            })?;
        let correct = active
            .correct_index()
            .ok_or(SessionError::MissingCorrectOption {
                question_id: active.id(),
            })?;

        let was_correct = option.is_correct;
        let correct_index = (!was_correct).then_some(correct);

        self.stats.record(was_correct);
        self.history.push(AnsweredRecord {
            question: Arc::clone(active.source()),
            selected_text: option.text.clone(),
            was_correct,
        });
        self.phase = SessionPhase::Evaluating(FeedbackState {
            selected_index: chosen_index,
            is_correct: was_correct,
            correct_index,
        });

        tracing::debug!(
            "Question {} answered {} ({}/{})",
            active.id(),
            if was_correct { "correctly" } else { "incorrectly" },
            self.stats.total_correct(),
            self.stats.total_answered()
        );

        Ok(SubmitOutcome::Evaluated(Evaluation {
            was_correct,
            correct_index,
        }))
    }

    /// End the feedback window and move on to a freshly selected question.
    ///
    /// Does nothing unless the session is evaluating.
    pub fn finish_feedback(&mut self) -> Result<(), SessionError> {
        if !self.is_evaluating() {
            return Ok(());
        }

        let next = select_next(&self.bank, &mut self.rng)?;
        self.active = Some(next);
        self.phase = SessionPhase::Idle;
        Ok(())
    }

    pub fn option_state(&self, index: usize) -> OptionState {
        let Some(feedback) = self.feedback() else {
            return OptionState::Unselected;
        };

        if index == feedback.selected_index {
            if feedback.is_correct {
                OptionState::SelectedCorrect
            } else {
                OptionState::SelectedIncorrect
            }
        } else if feedback.correct_index == Some(index) {
            OptionState::RevealedCorrect
        } else {
            OptionState::Dimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerOption, Question};

    fn bank(count: usize) -> Arc<QuestionBank> {
        let questions = (1..=count)
            .map(|id| {
                Question::new(
                    id,
                    format!("Question {}", id),
                    vec![
                        AnswerOption::new("right", true),
                        AnswerOption::new("wrong 1", false),
                        AnswerOption::new("wrong 2", false),
                    ],
                )
            })
            .collect();
        Arc::new(QuestionBank::new(QuizMetadata::default(), questions))
    }

    fn index_where(session: &QuizSession, correct: bool) -> usize {
        session
            .active_question()
            .unwrap()
            .options()
            .iter()
            .position(|o| o.is_correct == correct)
            .unwrap()
    }

    fn answer(session: &mut QuizSession, correct: bool) -> Evaluation {
        let index = index_where(session, correct);
        let outcome = session.submit_answer(index).unwrap();
        session.finish_feedback().unwrap();
        match outcome {
            SubmitOutcome::Evaluated(evaluation) => evaluation,
            SubmitOutcome::Ignored => panic!("answer was ignored"),
        }
    }

    #[test]
    fn test_starts_idle_with_question() {
        let session = QuizSession::with_seed(bank(3), 1);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.active_question().is_some());
        assert_eq!(session.stats().percentage(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_empty_bank_is_not_ready() {
        let mut session = QuizSession::with_seed(Arc::new(QuestionBank::empty()), 1);
        assert_eq!(session.phase(), SessionPhase::NotReady);
        assert!(session.active_question().is_none());
        assert_eq!(session.submit_answer(0), Err(SessionError::NotReady));
    }

    #[test]
    fn test_two_correct_one_incorrect() {
        let mut session = QuizSession::with_seed(bank(4), 9);

        answer(&mut session, true);
        answer(&mut session, false);
        answer(&mut session, true);

        let stats = session.stats();
        assert_eq!(stats.total_answered(), 3);
        assert_eq!(stats.total_correct(), 2);
        assert_eq!(stats.percentage(), 67);

        let outcomes: Vec<bool> = session.history().iter().map(|r| r.was_correct).collect();
        assert_eq!(outcomes, vec![true, false, true]);
    }

    #[test]
    fn test_incorrect_answer_reveals_correct_index() {
        let mut session = QuizSession::with_seed(bank(2), 5);
        let wrong = index_where(&session, false);
        let right = index_where(&session, true);

        let outcome = session.submit_answer(wrong).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Evaluated(Evaluation {
                was_correct: false,
                correct_index: Some(right),
            })
        );
        assert_ne!(wrong, right);

        let feedback = session.feedback().unwrap();
        assert_eq!(feedback.selected_index, wrong);
        assert_eq!(feedback.correct_index, Some(right));
        assert_eq!(session.option_state(wrong), OptionState::SelectedIncorrect);
        assert_eq!(session.option_state(right), OptionState::RevealedCorrect);
    }

    #[test]
    fn test_correct_answer_clears_correct_index() {
        let mut session = QuizSession::with_seed(bank(2), 5);
        let right = index_where(&session, true);

        let evaluation = match session.submit_answer(right).unwrap() {
            SubmitOutcome::Evaluated(evaluation) => evaluation,
            SubmitOutcome::Ignored => panic!("answer was ignored"),
        };
        assert!(evaluation.was_correct);
        assert_eq!(evaluation.correct_index, None);
        assert_eq!(session.option_state(right), OptionState::SelectedCorrect);

        let other = (right + 1) % 3;
        assert_eq!(session.option_state(other), OptionState::Dimmed);
    }

    #[test]
    fn test_second_submit_while_evaluating_is_ignored() {
        let mut session = QuizSession::with_seed(bank(2), 11);
        session.submit_answer(0).unwrap();
        let stats = *session.stats();
        let history_len = session.history().len();
        let feedback = *session.feedback().unwrap();

        assert_eq!(session.submit_answer(1), Ok(SubmitOutcome::Ignored));
        assert_eq!(session.submit_answer(0), Ok(SubmitOutcome::Ignored));

        assert_eq!(*session.stats(), stats);
        assert_eq!(session.history().len(), history_len);
        assert_eq!(*session.feedback().unwrap(), feedback);
    }

    #[test]
    fn test_out_of_range_leaves_state_untouched() {
        let mut session = QuizSession::with_seed(bank(2), 2);
        let result = session.submit_answer(3);
        assert_eq!(
            result,
            Err(SessionError::AnswerOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.stats().total_answered(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_missing_correct_option_is_reported() {
        let broken = Question::new(
            7,
            "Broken",
            vec![AnswerOption::new("a", false), AnswerOption::new("b", false)],
        );
        let bank = Arc::new(QuestionBank::new(QuizMetadata::default(), vec![broken]));
        let mut session = QuizSession::with_seed(bank, 1);

        assert_eq!(
            session.submit_answer(0),
            Err(SessionError::MissingCorrectOption { question_id: 7 })
        );
        assert_eq!(session.stats().total_answered(), 0);
    }

    #[test]
    fn test_finish_feedback_returns_to_idle() {
        let mut session = QuizSession::with_seed(bank(3), 4);
        session.submit_answer(0).unwrap();
        assert!(session.is_evaluating());

        session.finish_feedback().unwrap();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.feedback().is_none());
        assert_eq!(session.option_state(0), OptionState::Unselected);

        // idle: nothing to finish
        let before = session.active_question().map(|q| q.id());
        session.finish_feedback().unwrap();
        assert_eq!(session.active_question().map(|q| q.id()), before);
    }

    #[test]
    fn test_history_keeps_original_question_and_selected_text() {
        let mut session = QuizSession::with_seed(bank(1), 8);
        let wrong = index_where(&session, false);
        let text = session.active_question().unwrap().options()[wrong].text.clone();

        session.submit_answer(wrong).unwrap();

        let record = &session.history()[0];
        assert_eq!(record.selected_text, text);
        assert!(!record.was_correct);
        assert_eq!(record.question.options[0].text, "right");
    }

    #[test]
    fn test_answered_count_matches_history_length() {
        let mut session = QuizSession::with_seed(bank(5), 21);
        for i in 0..20 {
            let _ = session.submit_answer(i % 3);
            assert_eq!(session.stats().total_answered(), session.history().len());
            let _ = session.submit_answer((i + 1) % 3);
            assert_eq!(session.stats().total_answered(), session.history().len());
            session.finish_feedback().unwrap();
        }
        assert_eq!(session.history().len(), 20);
    }

    #[test]
    fn test_toggle_history_twice() {
        let mut session = QuizSession::with_seed(bank(2), 3);
        answer(&mut session, true);
        let stats = *session.stats();

        assert!(!session.history_visible());
        session.toggle_history();
        assert!(session.history_visible());
        session.toggle_history();
        assert!(!session.history_visible());

        assert_eq!(*session.stats(), stats);
        assert_eq!(session.history().len(), 1);
    }
}

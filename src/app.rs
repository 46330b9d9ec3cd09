use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

use crate::config::AppSettings;
use crate::data::QuestionBank;
use crate::effects::Celebration;
use crate::error::SessionError;
use crate::session::{FeedbackElapsed, FeedbackTimer, QuizSession, SubmitOutcome};

/// Terminal-facing controller around a [`QuizSession`].
///
/// Owns everything the presentation needs besides the session itself: the
/// highlighted option, the viewport size, the running celebration and the
/// pending feedback delay.
pub struct App {
    session: QuizSession,
    settings: AppSettings,
    cursor: usize,
    viewport: (u16, u16),
    celebration: Option<Celebration>,
    effects_rng: StdRng,
    feedback_timer: FeedbackTimer,
    feedback_tx: mpsc::UnboundedSender<FeedbackElapsed>,
    should_quit: bool,
}

impl App {
    pub fn new(
        session: QuizSession,
        settings: AppSettings,
        feedback_tx: mpsc::UnboundedSender<FeedbackElapsed>,
    ) -> Self {
        Self {
            session,
            settings,
            cursor: 0,
            viewport: (0, 0),
            celebration: None,
            effects_rng: StdRng::from_entropy(),
            feedback_timer: FeedbackTimer::new(settings.feedback_delay),
            feedback_tx,
            should_quit: false,
        }
    }

    pub fn with_bank(
        bank: Arc<QuestionBank>,
        settings: AppSettings,
        feedback_tx: mpsc::UnboundedSender<FeedbackElapsed>,
    ) -> Self {
        Self::new(QuizSession::new(bank), settings, feedback_tx)
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn celebration(&self) -> Option<&Celebration> {
        self.celebration.as_ref()
    }

    pub fn celebration_active(&self) -> bool {
        self.celebration.is_some()
    }

    pub fn feedback_pending(&self) -> bool {
        self.feedback_timer.is_pending()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn option_count(&self) -> usize {
        self.session
            .active_question()
            .map_or(0, |question| question.options().len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 && !self.session.is_evaluating() {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 && !self.session.is_evaluating() {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    pub fn submit_cursor(&mut self) -> Result<(), SessionError> {
        self.select_answer(self.cursor)
    }

    /// Forward an answer to the session and start feedback on success.
    pub fn select_answer(&mut self, index: usize) -> Result<(), SessionError> {
        match self.session.submit_answer(index)? {
            SubmitOutcome::Ignored => {
                tracing::debug!("Answer {} ignored while evaluating", index);
            }
            SubmitOutcome::Evaluated(evaluation) => {
                self.cursor = index;
                if evaluation.was_correct {
                    self.celebrate(Instant::now());
                }
                self.feedback_timer.schedule(&self.feedback_tx);
            }
        }
        Ok(())
    }

    /// Handle an elapsed feedback delay; stale tickets are dropped.
    pub fn on_feedback_elapsed(&mut self, elapsed: FeedbackElapsed) -> Result<(), SessionError> {
        if self.feedback_timer.accept(elapsed) {
            self.session.finish_feedback()?;
            self.cursor = 0;
        }
        Ok(())
    }

    pub fn toggle_history_view(&mut self) {
        self.session.toggle_history();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    fn celebrate(&mut self, now: Instant) {
        self.celebration = Some(Celebration::start(
            self.viewport,
            self.settings.celebration_duration,
            now,
            &mut self.effects_rng,
        ));
    }

    /// Advance the celebration by one frame, dropping it once faded out.
    pub fn on_frame(&mut self, now: Instant) {
        if let Some(celebration) = &mut self.celebration {
            if !celebration.tick(now) {
                self.celebration = None;
            }
        }
    }

    /// Cancel everything pending. Nothing fires after this.
    pub fn shutdown(&mut self) {
        self.feedback_timer.cancel();
        self.celebration = None;
    }
}

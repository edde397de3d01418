use rand::Rng;

use crate::quiz_engine::error::QuizError;
use crate::quiz_engine::models::{AnswerOutcome, Question, SessionResult, SessionState};

/// One quiz run: a shuffled, bounded question sequence with a cursor and a
/// running score.
///
/// A session only exists once started, so the state machine is just
/// `InProgress -> Completed`. Nothing is persisted by the session itself;
/// abandoning it at any point has no side effects.
pub struct QuizSession {
    questions: Vec<Question>,
    cursor: usize,
    score: u32,
}

impl QuizSession {
    /// Shuffle a copy of `pool` into a uniform random order and truncate to
    /// `count` when one is given.
    ///
    /// A `count` larger than the pool silently truncates to the pool size —
    /// "how many" and "which" stay independent policy decisions of the
    /// caller. Fails with `InvalidArgument` on an empty pool or `Some(0)`.
    pub fn start(
        pool: Vec<Question>,
        count: Option<usize>,
        rng: &mut impl Rng,
    ) -> Result<Self, QuizError> {
        if pool.is_empty() {
            return Err(QuizError::InvalidArgument(
                "question pool is empty".into(),
            ));
        }
        if count == Some(0) {
            return Err(QuizError::InvalidArgument(
                "question count must be positive".into(),
            ));
        }

        let mut questions = pool;
        // Fisher-Yates shuffle
        for i in (1..questions.len()).rev() {
            let j = rng.gen_range(0..=i);
            questions.swap(i, j);
        }
        if let Some(n) = count {
            questions.truncate(n);
        }

        Ok(QuizSession { questions, cursor: 0, score: 0 })
    }

    pub fn state(&self) -> SessionState {
        if self.cursor < self.questions.len() {
            SessionState::InProgress
        } else {
            SessionState::Completed
        }
    }

    /// The question at the cursor. Fails with `InvalidState` once the
    /// session is completed.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.questions
            .get(self.cursor)
            .ok_or(QuizError::InvalidState(
                "current_question called on a completed session",
            ))
    }

    /// Score one answer and advance the cursor.
    ///
    /// An out-of-range `choice_index` is rejected before any state changes,
    /// so score and cursor are untouched on failure. The outcome is a pure
    /// read of the just-answered question.
    pub fn submit_answer(&mut self, choice_index: usize) -> Result<AnswerOutcome, QuizError> {
        let question = self.current_question()?;
        if choice_index >= question.options.len() {
            return Err(QuizError::InvalidArgument(format!(
                "answer index {} out of range (question has {} options)",
                choice_index,
                question.options.len()
            )));
        }

        let is_correct = choice_index == question.correct_index;
        let outcome = AnswerOutcome {
            is_correct,
            correct_index: question.correct_index,
            explanation: question.explanation.clone(),
        };

        if is_correct {
            self.score += 1;
        }
        self.cursor += 1;
        Ok(outcome)
    }

    /// Final score, labelled with the caller's category name. Fails with
    /// `InvalidState` until every question has been answered.
    pub fn result(&self, category_label: &str) -> Result<SessionResult, QuizError> {
        if self.state() != SessionState::Completed {
            return Err(QuizError::InvalidState(
                "result called before the session completed",
            ));
        }
        Ok(SessionResult {
            category_label: category_label.to_string(),
            score: self.score,
            total: self.total(),
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions in this session's sequence.
    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// 1-based number of the upcoming question (for "Question 3/5" display).
    pub fn position(&self) -> usize {
        self.cursor + 1
    }
}

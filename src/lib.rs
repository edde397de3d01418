//! # study_quiz
//!
//! An offline, terminal-friendly study quiz engine for technical interview
//! preparation.
//!
//! The library holds everything with state or cross-run behavior: a
//! validated [`QuestionBank`] of multiple-choice questions grouped by
//! category, a [`QuizSession`] that shuffles a question pool and scores
//! answers one at a time, and a [`StatsStore`] that keeps a cumulative
//! accuracy ledger in a human-readable JSON file across runs. Presentation
//! is deliberately someone else's job — every call returns plain data
//! (question text, options, correctness, running score), never formatted
//! output, so any front end (the bundled CLI binary, a test harness, a
//! scripted driver) can sit on top.
//!
//! ## How a session works
//!
//! 1. Pick a pool: one category via [`QuestionBank::get_category`], or all
//!    categories via [`QuestionBank::all_questions`] for a mixed quiz.
//! 2. Call [`QuizSession::start`] with the pool, an optional question
//!    count, and an RNG — the pool is Fisher-Yates shuffled (uniform over
//!    permutations) and truncated, so "how many" and "which" stay
//!    independent.
//! 3. Loop: [`QuizSession::current_question`], show it, then
//!    [`QuizSession::submit_answer`] with the chosen option index. Each
//!    submission returns an [`AnswerOutcome`] with correctness, the correct
//!    index, and the explanation.
//! 4. When every question is answered the session is complete;
//!    [`QuizSession::result`] yields the final score, which
//!    [`StatsStore::add_session`] folds into the durable ledger.
//!
//! ## Key properties
//!
//! - **Deterministic under a seeded RNG**: `start` takes `&mut impl Rng`,
//!   so a seeded `StdRng` reproduces the exact question order — used
//!   throughout the tests.
//! - **No partial-session durability**: nothing is persisted until
//!   `add_session`; abandoning a session has no side effects.
//! - **Crash-safe persistence**: the stats file is replaced via
//!   write-to-temp-then-rename, and a corrupt file is surfaced as an error
//!   instead of being silently reset.
//!
//! ## Quick start
//!
//! ```rust
//! use study_quiz::{builtin_bank, QuizSession, SessionState};
//!
//! let bank = builtin_bank();
//! let category = bank.get_category("big_o").unwrap();
//!
//! let mut rng = rand::thread_rng();
//! let mut session =
//!     QuizSession::start(category.questions.clone(), Some(3), &mut rng).unwrap();
//!
//! while session.state() == SessionState::InProgress {
//!     let q = session.current_question().unwrap().clone();
//!     println!("Q: {}", q.text);
//!     // answer the first option, just to drive the loop
//!     let outcome = session.submit_answer(0).unwrap();
//!     println!("  correct: {} — {}", outcome.is_correct, outcome.explanation);
//! }
//!
//! let result = session.result(&category.display_name).unwrap();
//! println!("score: {}/{}", result.score, result.total);
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `study_quiz::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    builtin_bank, load_record, save_record, AnswerOutcome, Category,
    CategoryBreakdown, CategoryTally, Question, QuestionBank, QuizError,
    QuizSession, SessionEntry, SessionResult, SessionState, StatsRecord,
    StatsStore, StatsSummary,
};

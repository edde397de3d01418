//! Core quiz engine — question bank, session sequencing, and statistics.
//!
//! ## Module overview
//!
//! | Module    | Purpose |
//! |-----------|---------|
//! | `models`  | All shared types: questions, outcomes, the durable stats record |
//! | `error`   | The `QuizError` taxonomy returned by every fallible operation |
//! | `bank`    | Validated, immutable view over the category/question content |
//! | `dataset` | The embedded 4-category, 20-question dataset |
//! | `session` | `QuizSession` — shuffle, cursor, per-answer scoring |
//! | `stats`   | `StatsStore` — JSON persistence and read-side projections |

pub mod bank;
pub mod dataset;
pub mod error;
pub mod models;
pub mod session;
pub mod stats;

// Re-export the public API surface so callers can use
// `quiz_engine::QuizSession` without reaching into sub-modules.
pub use bank::QuestionBank;
pub use dataset::builtin_bank;
pub use error::QuizError;
pub use models::{
    AnswerOutcome, Category, CategoryBreakdown, CategoryTally, Question,
    SessionEntry, SessionResult, SessionState, StatsRecord, StatsSummary,
};
pub use session::QuizSession;
pub use stats::{load_record, save_record, StatsStore};

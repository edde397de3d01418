use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question content
// ---------------------------------------------------------------------------

/// One multiple-choice question.
///
/// `correct_index` always indexes into `options`; [`QuestionBank::new`]
/// rejects any question where it does not.
///
/// [`QuestionBank::new`]: crate::quiz_engine::bank::QuestionBank::new
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

/// A named, fixed grouping of questions.
///
/// `key` is the stable machine identifier (e.g. `"big_o"`); `display_name`
/// is what a presentation layer shows (e.g. `"Big O Notation"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub display_name: String,
    pub questions: Vec<Question>,
}

// ---------------------------------------------------------------------------
// Session types
// ---------------------------------------------------------------------------

/// Where a session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress,
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::InProgress => write!(f, "in progress"),
            SessionState::Completed => write!(f, "completed"),
        }
    }
}

/// What happened to one submitted answer.
///
/// A pure read of the just-answered question; holds everything a caller
/// needs to show feedback without reaching back into the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_index: usize,
    pub explanation: String,
}

/// Final score of a completed session. `0 <= score <= total`, `total > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub category_label: String,
    pub score: u32,
    pub total: u32,
}

// ---------------------------------------------------------------------------
// Durable statistics
// ---------------------------------------------------------------------------

/// One finished session as recorded in the stats file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    pub date: DateTime<Utc>,
    pub category: String,
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
}

/// Running correct/total tally for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub correct: u32,
    pub total: u32,
}

/// The cross-session accuracy ledger, persisted as JSON.
///
/// `sessions` is append-only in chronological order. `category_stats` is a
/// `BTreeMap` so the serialized object keeps a stable key order and
/// `save(load())` round-trips byte-for-byte in structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub sessions: Vec<SessionEntry>,
    pub category_stats: BTreeMap<String, CategoryTally>,
}

// ---------------------------------------------------------------------------
// Read-side projections
// ---------------------------------------------------------------------------

/// Overall accuracy rollup across all recorded sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_questions: u32,
    pub correct_answers: u32,
    pub overall_accuracy: f64,
    pub session_count: usize,
}

/// Per-category accuracy row, ordered by label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub label: String,
    pub correct: u32,
    pub total: u32,
    pub accuracy: f64,
}

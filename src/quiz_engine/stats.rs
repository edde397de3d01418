use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::quiz_engine::error::QuizError;
use crate::quiz_engine::models::{
    CategoryBreakdown, SessionEntry, StatsRecord, StatsSummary,
};

/// Durable store for the cross-session accuracy ledger.
///
/// Owns the [`StatsRecord`] for the process lifetime: loaded once at
/// construction, mutated only by [`add_session`], and written back
/// synchronously after every mutation with a temp-file-then-rename so a
/// crash mid-write never destroys the prior valid file.
///
/// [`add_session`]: StatsStore::add_session
pub struct StatsStore {
    path: PathBuf,
    record: StatsRecord,
}

impl StatsStore {
    /// Load the stats file at `path`, or start from the zero-value record
    /// if it does not exist. A file that exists but fails to parse or
    /// violates the schema invariants is a `CorruptStats` error — history
    /// is never silently reset.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, QuizError> {
        let path = path.into();
        let record = load_record(&path)?;
        Ok(StatsStore { path, record })
    }

    pub fn record(&self) -> &StatsRecord {
        &self.record
    }

    /// Record a completed session and persist the updated ledger.
    ///
    /// Rejects `total == 0` and `score > total` before touching any state.
    /// If the persist itself fails, the in-memory record already holds the
    /// new session; call [`persist`] to retry the write without
    /// re-recording.
    ///
    /// [`persist`]: StatsStore::persist
    pub fn add_session(
        &mut self,
        category_label: &str,
        score: u32,
        total: u32,
    ) -> Result<&StatsRecord, QuizError> {
        if total == 0 {
            return Err(QuizError::InvalidArgument(
                "session total must be positive".into(),
            ));
        }
        if score > total {
            return Err(QuizError::InvalidArgument(format!(
                "score {score} exceeds total {total}"
            )));
        }

        self.record.sessions.push(SessionEntry {
            date: Utc::now(),
            category: category_label.to_string(),
            score,
            total,
            percentage: percentage(score, total),
        });
        self.record.total_questions += total;
        self.record.correct_answers += score;
        let tally = self
            .record
            .category_stats
            .entry(category_label.to_string())
            .or_default();
        tally.correct += score;
        tally.total += total;

        self.persist()?;
        Ok(&self.record)
    }

    /// Write the current record to disk atomically.
    pub fn persist(&self) -> Result<(), QuizError> {
        save_record(&self.path, &self.record)
    }

    /// Overall accuracy rollup. Accuracy is 0 when nothing was answered yet.
    pub fn summary(&self) -> StatsSummary {
        let r = &self.record;
        let overall_accuracy = if r.total_questions == 0 {
            0.0
        } else {
            percentage(r.correct_answers, r.total_questions)
        };
        StatsSummary {
            total_questions: r.total_questions,
            correct_answers: r.correct_answers,
            overall_accuracy,
            session_count: r.sessions.len(),
        }
    }

    /// Per-category accuracy rows, ordered by label.
    pub fn category_breakdown(&self) -> Vec<CategoryBreakdown> {
        self.record
            .category_stats
            .iter()
            .map(|(label, tally)| CategoryBreakdown {
                label: label.clone(),
                correct: tally.correct,
                total: tally.total,
                accuracy: percentage(tally.correct, tally.total),
            })
            .collect()
    }

    /// The last `n` recorded sessions, most recent first.
    pub fn recent_sessions(&self, n: usize) -> Vec<&SessionEntry> {
        self.record.sessions.iter().rev().take(n).collect()
    }
}

/// `score / total` as a percentage rounded to one decimal place.
fn percentage(score: u32, total: u32) -> f64 {
    (score as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Read and validate a stats record; absent file yields the zero record.
pub fn load_record(path: &Path) -> Result<StatsRecord, QuizError> {
    if !path.exists() {
        return Ok(StatsRecord::default());
    }
    let raw = fs::read_to_string(path).map_err(|source| QuizError::Storage {
        path: path.to_path_buf(),
        source,
    })?;
    let record: StatsRecord =
        serde_json::from_str(&raw).map_err(|e| QuizError::CorruptStats {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
    if let Err(detail) = check_invariants(&record) {
        return Err(QuizError::CorruptStats {
            path: path.to_path_buf(),
            detail,
        });
    }
    Ok(record)
}

/// Write `record` to `path` via a sibling temp file and an atomic rename.
pub fn save_record(path: &Path, record: &StatsRecord) -> Result<(), QuizError> {
    let json = serde_json::to_string_pretty(record).map_err(|e| QuizError::CorruptStats {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let io_err = |source, p: &Path| QuizError::Storage {
        path: p.to_path_buf(),
        source,
    };
    fs::write(&tmp, json).map_err(|e| io_err(e, &tmp))?;
    fs::rename(&tmp, path).map_err(|e| io_err(e, path))?;
    Ok(())
}

/// Schema invariants a well-formed record must satisfy.
fn check_invariants(record: &StatsRecord) -> Result<(), String> {
    if record.correct_answers > record.total_questions {
        return Err(format!(
            "correct_answers {} exceeds total_questions {}",
            record.correct_answers, record.total_questions
        ));
    }
    for (label, tally) in &record.category_stats {
        if tally.correct > tally.total {
            return Err(format!(
                "category {label}: correct {} exceeds total {}",
                tally.correct, tally.total
            ));
        }
    }
    for entry in &record.sessions {
        if entry.total == 0 || entry.score > entry.total {
            return Err(format!(
                "session entry for {}: score {}/{} out of range",
                entry.category, entry.score, entry.total
            ));
        }
    }
    Ok(())
}

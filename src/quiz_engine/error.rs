use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the quiz core can report.
///
/// All operations return these to the immediate caller; the core never logs
/// and never swallows an error. The driver decides recovery per variant.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The requested category key does not exist in the bank.
    #[error("unknown category: {key}")]
    CategoryNotFound { key: String },

    /// Malformed caller input, rejected before any state changed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation called in a session state that forbids it. A caller bug,
    /// not a data problem.
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),

    /// The stats file exists but cannot be parsed into the schema. Surfaced
    /// rather than reinitialized so prior history is never silently lost.
    #[error("stats file {path:?} is corrupt: {detail}")]
    CorruptStats { path: PathBuf, detail: String },

    /// Reading or writing the stats file failed at the I/O level. The
    /// in-memory record is unaffected, so the caller may retry the persist.
    #[error("stats I/O failed for {path:?}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

//! Error types for automaton construction.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building an automaton from transition records.
#[derive(Debug, Error)]
pub enum Error {
    /// A transition record could not be parsed. Ingestion aborts on the
    /// first malformed record so a partially built graph never escapes.
    #[error("malformed record at line {line}: {defect}")]
    MalformedRecord {
        /// 1-based line number of the offending record.
        line: usize,
        defect: RecordDefect,
    },

    /// The record source failed with an OS-level error.
    #[error("record source unavailable: {0}")]
    Io(#[from] std::io::Error),
}

/// The specific way a transition record violated the `from,symbol=to` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordDefect {
    #[error("expected ',' after the source state name")]
    MissingComma,
    #[error("expected '=' after the transition symbol")]
    MissingEquals,
    #[error("empty state name")]
    EmptyName,
    #[error("record ends before the target state name")]
    Truncated,
    #[error("unexpected delimiter inside a state name")]
    StrayDelimiter,
}

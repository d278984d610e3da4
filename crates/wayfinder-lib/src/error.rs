use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the wayfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Graph file could not be located at the given path.
    #[error("graph file not found at {path}")]
    GraphNotFound { path: PathBuf },

    /// Raised when a record lacks the `:` between node label and edge list.
    #[error("line {line}: missing ':' separator between node label and edge list")]
    MissingSeparator { line: usize },

    /// Raised when an edge token is not of the form `label,cost`.
    #[error("line {line}: malformed edge token '{token}', expected 'label,cost'")]
    MalformedEdge { line: usize, token: String },

    /// Raised when an edge cost does not parse as a non-negative integer.
    #[error("line {line}: invalid edge cost in token '{token}'")]
    InvalidCost {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

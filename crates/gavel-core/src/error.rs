//! Error types for gavel-core.
//!
//! All errors are raised synchronously at construction or resolution time;
//! the query API on a loaded structure never fails.

use thiserror::Error;

/// Errors that can occur while loading or resolving qrels resources.
#[derive(Debug, Clone, Error)]
pub enum QrelsError {
    /// The given path (literal or resolved) does not exist or cannot be opened
    #[error("Qrels resource not found: {0}")]
    ResourceNotFound(String),
    /// A line does not tokenize into an accepted layout, or the grade is not an integer
    #[error("Malformed qrels: {0}")]
    MalformedQrels(String),
    /// A dataset identifier outside the enumerated catalog
    #[error("Unrecognized dataset identifier: {0}")]
    UnrecognizedIdentifier(String),
}

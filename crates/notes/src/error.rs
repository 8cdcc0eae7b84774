//! Reconstruction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A reconstruction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for reconstruction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A highlight payload referenced a chapter title that the book's own
    /// directory does not contain. The two listings are fetched separately
    /// and expected consistent; a mismatch means the remote data disagrees
    /// with itself and no heading level can honestly be assigned.
    #[display("chapter '{title}' is missing from the book's directory")]
    DirectoryMismatch { title: String },
    /// A field was found but could not be parsed.
    #[display("failed to parse field '{field}', found value: {value}")]
    ParseError {
        /// The field that failed to parse.
        field: &'static str,
        /// Details about the parsing failure.
        value: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Reconstruction is deterministic over its inputs; retrying the same
        // payloads cannot change the outcome.
        false
    }
}

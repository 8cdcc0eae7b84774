//! Client Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A client error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
/// The remote platform makes no distinction between authentication failures,
/// rate limiting, and malformed identifiers; all of them surface as a
/// non-success status and therefore collapse into [`ErrorKind::RemoteFailure`].
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The platform answered with a non-success status. Carries the raw
    /// response body, which is the only diagnostic the platform provides.
    #[display("remote call failed: {_0}")]
    RemoteFailure(#[error(not(source))] String),
    /// The request never completed (connection, TLS, timeout).
    #[display("request could not be completed")]
    Transport,
    /// The response body was not the JSON shape the endpoint documents.
    #[display("malformed response payload from {_0}")]
    Decode(#[error(not(source))] &'static str),
    /// A required session cookie was not present in the captured cookies.
    #[display("session cookie '{_0}' is missing")]
    MissingCookie(#[error(not(source))] &'static str),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport)
    }
}

//! Library Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use margin_client::error::{Error as ClientError, ErrorKind as ClientErrorKind};

/// A library error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// A platform API call failed.
    #[display("api call failed: {_0}")]
    Api(ClientErrorKind),
    /// Writing an output file failed.
    #[display("could not write output file")]
    Io,
    /// Assembling the tabular export failed.
    #[display("tabular export failed")]
    Csv,
}

impl ErrorKind {
    /// Convert a client error into a library error, preserving the client
    /// crate's `Exn` frame (error tree) as a child in its own error tree.
    #[track_caller]
    pub fn api(err: ClientError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Api(inner))
    }

    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(inner) => inner.is_retryable(),
            Self::Io | Self::Csv => false,
        }
    }
}

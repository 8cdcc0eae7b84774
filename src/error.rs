//! CLI Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use margin_client::error::ErrorKind as ClientErrorKind;
use margin_notes::error::ErrorKind as NotesErrorKind;

/// A CLI error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Classifies which subsystem a command failed in.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Configuration could not be loaded.
    #[display("configuration error")]
    Config,
    /// A platform API call failed.
    #[display("api call failed: {_0}")]
    Api(ClientErrorKind),
    /// Note reconstruction failed.
    #[display("note reconstruction failed: {_0}")]
    Notes(NotesErrorKind),
    /// A library operation (download, export) failed.
    #[display("library operation failed")]
    Library,
    /// No enumerable book carries the requested identifier.
    #[display("no book with id '{_0}' on the shelf or in the notebooks")]
    BookNotFound(#[error(not(source))] String),
}

impl ErrorKind {
    #[track_caller]
    pub fn config(err: margin_config::error::Error) -> Error {
        err.raise(ErrorKind::Config)
    }

    /// Convert a client error, preserving its `Exn` frame as a child in the
    /// CLI's own error tree.
    #[track_caller]
    pub fn api(err: margin_client::error::Error) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Api(inner))
    }

    #[track_caller]
    pub fn notes(err: margin_notes::error::Error) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Notes(inner))
    }

    #[track_caller]
    pub fn library(err: margin_library::error::Error) -> Error {
        err.raise(ErrorKind::Library)
    }
}

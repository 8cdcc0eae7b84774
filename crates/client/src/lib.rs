//! Blocking HTTP client for the WeRead reading-platform API.
//!
//! Authentication is cookie replay: a [`Session`] captured from the browser
//! is serialized into every request. Endpoints return typed payloads under
//! [`models`]; reconstruction of readable notes from those payloads lives in
//! the `margin-notes` crate.

mod client;
mod consts;
pub mod error;
pub mod models;
mod session;

pub use crate::client::{ApiClient, ClientOptions};
pub use crate::consts::DEFAULT_BASE_URL;
pub use crate::session::Session;

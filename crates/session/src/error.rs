//! Error type shared by the session and console-view crates.

use thiserror::Error;

/// Result alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Failures surfaced while reading the session or touching the page.
///
/// Errors are never caught internally; they always propagate to the
/// immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// One or both stored credentials are missing or empty.
    #[error("login info not found")]
    LoginInfoNotFound,

    /// An element lookup by id found nothing in the page.
    #[error("no element with id `{id}` in the page")]
    ElementNotFound { id: String },
}

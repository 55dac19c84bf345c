//! Core error types for the Mentordesk application.
//!
//! The taxonomy follows the three failure surfaces of the dashboard:
//! validation failures are caught before any network call, remote failures
//! wrap the backend's table/storage APIs, and auth failures block instead
//! of retrying. Nothing here is fatal to the process.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Remote call failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors caught before any network call leaves the process.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(String),

    #[error("Date '{0}' is in the future")]
    FutureDate(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Failures of the remote store, blob storage, or any other backend call.
///
/// These are surfaced as transient notifications by the embedding UI and,
/// for optimistic updates, trigger a rollback. They are never retried here.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Remote store returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Failed to decode remote response: {0}")]
    Decode(String),
}

/// Session problems. Blocking: the caller must re-authenticate.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No active session")]
    NoActiveSession,

    #[error("Session rejected by the backend: {0}")]
    SessionRejected(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Remote(RemoteError::Request(err.to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Remote(RemoteError::Decode(err.to_string()))
    }
}

//! Client error taxonomy.
//!
//! Every failure a view can surface falls into one of four buckets; all of
//! them are caught at the call site and rendered as an inline message, none
//! are fatal to the application.

use thiserror::Error;

/// Failures surfaced by API calls and the domain state machines.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No token in the session store, or the server rejected the one we
    /// sent. An expired token is indistinguishable from a missing one.
    #[error("not authenticated")]
    Unauthenticated,

    /// Explicit 403 from the server (profile endpoint).
    #[error("forbidden")]
    Forbidden,

    /// Network failure, non-2xx status, or an unparseable response body.
    #[error("request failed: {0}")]
    FetchFailed(String),

    /// Client-side validation (password mismatch) or a server-reported
    /// field error, carrying the message to display.
    #[error("{0}")]
    ValidationFailed(String),
}

impl ClientError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ClientError::Unauthenticated)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::FetchFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::FetchFailed(format!("invalid response body: {err}"))
    }
}

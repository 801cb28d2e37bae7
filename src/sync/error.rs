//! Errors raised while talking to the scoring service.

use derive_more::{Display, Error};

use crate::board::ShapeError;

/// Failure of a single request to the scoring service.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SyncError {
    /// The request never completed: connection refused, timeout, reset.
    #[display("network error: {_0}")]
    Transport(#[error(not(source))] String),

    /// The service answered with a non-success status and no usable body.
    #[display("server returned HTTP {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The payload did not have the expected shape.
    #[display("malformed response: {_0}")]
    Malformed(#[error(not(source))] String),
}

impl SyncError {
    /// Whether the failure came from a bad payload rather than the network.
    pub fn is_malformed(&self) -> bool {
        matches!(self, SyncError::Malformed(_))
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SyncError::Transport(format!("request timed out: {}", err))
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Malformed(err.to_string())
    }
}

impl From<ShapeError> for SyncError {
    fn from(err: ShapeError) -> Self {
        SyncError::Malformed(err.to_string())
    }
}

/// Which half of a mutate-then-refetch round-trip failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FailureStage {
    /// Sending the mutation failed; it may or may not have landed.
    #[display("send")]
    Send,
    /// The mutation was acknowledged but the board could not be re-fetched.
    #[display("refetch")]
    Refetch,
}

/// A failed round-trip, with the fresh board if the refetch still worked.
#[derive(Debug, Clone, PartialEq, Display, Error)]
#[display("{stage} failed: {error}")]
pub struct SyncFailure {
    /// Failed step.
    pub stage: FailureStage,
    /// What went wrong.
    #[error(source)]
    pub error: SyncError,
    /// Board fetched after a failed send, if that fetch succeeded.
    pub resynced: Option<crate::board::Snapshot>,
}

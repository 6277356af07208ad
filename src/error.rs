use reqwest::StatusCode;
use thiserror::Error;

/// Failure to turn a candidate identifier into a usable release.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No usable release at this identifier: either the catalog has none, or it has one without
    /// any videos. Callers cannot tell the two apart.
    #[error("invalid release")]
    InvalidRelease,

    #[error("failed to decode release: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response status: {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("ran out of release IDs to try")]
    Exhausted,
}

impl FetchError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InvalidRelease)
    }
}

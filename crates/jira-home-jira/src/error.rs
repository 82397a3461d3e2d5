//! Error types for JIRA integration

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Upstream answered with a non-success status
    #[error("JIRA API error: {status} {status_text}")]
    Status {
        status: StatusCode,
        status_text: String,
        body: String,
    },
}

impl Error {
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        Self::Status {
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the proxy client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch project data: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

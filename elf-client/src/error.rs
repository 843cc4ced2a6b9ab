//! Error types for the puzzle site client

use thiserror::Error;

/// Errors from talking to the puzzle site.
#[derive(Error, Debug)]
pub enum ElfError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The site answered with an unexpected status
    #[error("unexpected HTTP status: {status}")]
    InvalidStatus {
        status: reqwest::StatusCode,
    },

    /// Response body was not valid UTF-8
    #[error("failed to decode response as UTF-8")]
    Encoding,

    /// The response HTML had no recognizable content
    #[error("failed to parse HTML response")]
    HtmlParse,

    /// Leaderboard JSON did not match the expected shape
    #[error("failed to parse leaderboard JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Client construction failed
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

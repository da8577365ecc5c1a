use thiserror::Error;

#[derive(Debug, Error)]
pub enum HotentryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to parse upstream feed: {0}")]
    Parse(String),

    #[error("Failed to write RSS output: {0}")]
    Write(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to fetch transaction summary: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("api returned non-success status: {status}")]
    Status { status: reqwest::StatusCode },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(String),

    #[error("invalid service url in {var}: {reason}")]
    InvalidUrl { var: String, reason: String },

    #[error("invalid auth header name {0:?}")]
    InvalidHeaderName(String),

    #[error("api key contains characters not allowed in a header value")]
    InvalidApiKey,

    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

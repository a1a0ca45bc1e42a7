use thiserror::Error;

/// Anything that can go wrong talking to the activities backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status.
    #[error("server rejected request (HTTP {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },

    /// Body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid board config: {0}")]
    Invalid(#[from] serde_json::Error),
}

// Error types at the fetcher and tool-surface seams

use thiserror::Error;

/// Why a weekly document could not be used. Callers only see absence; the kind goes to the logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("document not found")]
    NotFound,
    #[error("document has no cameras")]
    Empty,
    #[error("upstream returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("request timed out")]
    Timeout,
    #[error("malformed document: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl FetchError {
    /// Not-found and empty documents are the common "no data for this week" case.
    pub fn is_missing(&self) -> bool {
        matches!(self, FetchError::NotFound | FetchError::Empty)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::Decode(e)
        } else {
            FetchError::Transport(e)
        }
    }
}

/// Tool invocation failures that never reach the aggregation engine.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ToolError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ToolError::InvalidArguments(message.into())
    }
}

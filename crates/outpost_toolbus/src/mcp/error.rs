use thiserror::Error;

/// Protocol-level errors
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for protocol operations
pub type McpResult<T> = Result<T, McpError>;

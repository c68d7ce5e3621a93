use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutpostError {
    #[error("invalid target: {0}")]
    Target(String),

    #[error("tool error: {0}")]
    Tool(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, OutpostError>;

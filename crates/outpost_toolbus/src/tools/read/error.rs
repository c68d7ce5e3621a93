use thiserror::Error;

use crate::ssh::SshError;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error(transparent)]
    Transport(#[from] SshError),
}

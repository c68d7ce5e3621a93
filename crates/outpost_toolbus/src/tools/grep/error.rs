use thiserror::Error;

use crate::ssh::SshError;

#[derive(Debug, Error)]
pub enum GrepError {
    #[error("Search path not found: {0}")]
    SearchPathNotFound(String),

    #[error(transparent)]
    Transport(#[from] SshError),
}

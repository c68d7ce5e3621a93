use thiserror::Error;

use crate::ssh::SshError;

#[derive(Debug, Error)]
pub enum LsError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error(transparent)]
    Transport(#[from] SshError),
}

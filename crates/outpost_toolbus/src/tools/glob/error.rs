use thiserror::Error;

use crate::ssh::SshError;

#[derive(Debug, Error)]
pub enum GlobError {
    #[error("Error searching for files: {0}")]
    Transport(#[from] SshError),
}

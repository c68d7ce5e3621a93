use thiserror::Error;

use crate::ssh::SshError;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Error writing file: {0}")]
    Transport(#[from] SshError),
}

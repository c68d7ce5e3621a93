use thiserror::Error;

use crate::ssh::SshError;

#[derive(Debug, Error)]
pub enum BashError {
    #[error("Error executing command: {0}")]
    Transport(#[from] SshError),
}

use thiserror::Error;

use crate::ssh::SshError;

#[derive(Debug, Error)]
pub enum EditError {
    #[error("old_string and new_string must be different")]
    InvalidEdit,

    #[error("old_string not found in file: {0}")]
    NotFound(String),

    #[error(
        "old_string appears {0} times in file. Use replace_all=true or provide more context to make it unique."
    )]
    AmbiguousMatch(usize),

    #[error(transparent)]
    Transport(#[from] SshError),
}

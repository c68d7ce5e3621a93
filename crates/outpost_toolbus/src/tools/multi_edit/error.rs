use thiserror::Error;

use crate::ssh::SshError;

/// Failures carry the 1-based index of the edit that was rejected; nothing
/// is uploaded once any edit fails.
#[derive(Debug, Error)]
pub enum MultiEditError {
    #[error("edits array must contain at least one edit")]
    Empty,

    #[error("Edit {index}: old_string and new_string must be different")]
    InvalidEdit { index: usize },

    #[error("Edit {index}: old_string not found in file: {old}")]
    NotFound { index: usize, old: String },

    #[error(
        "Edit {index}: old_string appears {count} times in file. Use replace_all=true or provide more context to make it unique."
    )]
    AmbiguousMatch { index: usize, count: usize },

    #[error(transparent)]
    Transport(#[from] SshError),
}

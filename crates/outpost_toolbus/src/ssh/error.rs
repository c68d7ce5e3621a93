use thiserror::Error;

#[derive(Debug, Error)]
pub enum SshError {
    #[error("Command timed out after {0}ms")]
    Timeout(u64),

    #[error("SSH connection failed: {0}")]
    ConnectFailed(String),

    #[error("Failed to spawn {command}: {message}")]
    SpawnFailed { command: String, message: String },

    #[error("Failed to upload file: {0}")]
    UploadFailed(String),

    #[error("Failed to download file: {0}")]
    DownloadFailed(String),

    #[error("Remote output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

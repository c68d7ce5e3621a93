use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::error::SshError;

/// A short-lived local file that shuttles content between an operation and
/// the transport.
///
/// Created per operation, owned exclusively by it, and removed when the
/// value drops — on success, validation failure, and transport failure
/// alike. Removal errors are ignored so cleanup can never replace the
/// operation's own result.
pub struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    /// Creates a uniquely named temp file seeded with `content`.
    pub async fn create(content: &str) -> Result<Self, SshError> {
        let path = std::env::temp_dir().join(format!("outpost-{}", Uuid::new_v4().simple()));
        tokio::fs::write(&path, content).await?;
        Ok(Self { path })
    }

    /// Creates an empty staging file, ready to receive a download.
    pub async fn empty() -> Result<Self, SshError> {
        Self::create("").await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_to_string(&self) -> Result<String, SshError> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

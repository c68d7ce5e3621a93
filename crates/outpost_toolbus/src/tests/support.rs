//! Shared test fixtures.
//!
//! `MockTransport` stands in for the `ssh`/`scp` backed transport: remote
//! files live in an in-memory map, every command line and transfer is
//! recorded, and command output can be scripted. Tests assert against the
//! recorded traffic — in particular that failed edits never reach the
//! upload path.

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use outpost_core::RemoteTarget;

use crate::ssh::{CommandOutput, RunOptions, SshError, Transport};

pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().unwrap()
}

pub fn target() -> RemoteTarget {
    RemoteTarget::parse("testhost:/remote/project").unwrap()
}

#[derive(Default)]
pub struct MockTransport {
    pub files: Mutex<HashMap<String, String>>,
    pub commands: Mutex<Vec<(String, RunOptions)>>,
    pub responses: Mutex<VecDeque<CommandOutput>>,
    pub uploads: Mutex<Vec<(String, String)>>,
    pub downloads: Mutex<Vec<String>>,
    pub fail_uploads: Mutex<bool>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
        self
    }

    pub fn push_stdout(&self, stdout: &str) {
        self.responses.lock().unwrap().push_back(CommandOutput {
            stdout: stdout.to_string(),
            ..CommandOutput::default()
        });
    }

    pub fn push_output(&self, output: CommandOutput) {
        self.responses.lock().unwrap().push_back(output);
    }

    pub fn set_fail_uploads(&self) {
        *self.fail_uploads.lock().unwrap() = true;
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().unwrap().len()
    }

    pub fn download_count(&self) -> usize {
        self.downloads.lock().unwrap().len()
    }

    pub fn last_command(&self) -> (String, RunOptions) {
        self.commands.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn run(&self, command: &str, opts: &RunOptions) -> Result<CommandOutput, SshError> {
        self.commands
            .lock()
            .unwrap()
            .push((command.to_string(), opts.clone()));
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }

    async fn upload(&self, local_path: &Path, remote_path: &str) -> Result<(), SshError> {
        if *self.fail_uploads.lock().unwrap() {
            return Err(SshError::UploadFailed("scp: connection lost".to_string()));
        }
        let content = tokio::fs::read_to_string(local_path).await?;
        self.uploads
            .lock()
            .unwrap()
            .push((remote_path.to_string(), content.clone()));
        self.files
            .lock()
            .unwrap()
            .insert(remote_path.to_string(), content);
        Ok(())
    }

    async fn download(&self, remote_path: &str, local_path: &Path) -> Result<(), SshError> {
        self.downloads.lock().unwrap().push(remote_path.to_string());
        let content = self.files.lock().unwrap().get(remote_path).cloned();
        match content {
            Some(content) => {
                tokio::fs::write(local_path, content).await?;
                Ok(())
            }
            None => Err(SshError::DownloadFailed(format!(
                "scp: {remote_path}: No such file or directory"
            ))),
        }
    }

    async fn probe(&self) -> Result<(), SshError> {
        Ok(())
    }
}

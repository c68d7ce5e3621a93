use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::error::SshError;

/// Default bound on a single remote command or transfer.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_millis(120_000);

/// Options for one remote command execution.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub timeout: Duration,
    /// Remote directory to `cd` into before running the command.
    pub cwd: Option<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_COMMAND_TIMEOUT,
            cwd: None,
        }
    }
}

/// Captured output of one remote command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Executes commands on, and moves files to and from, a single remote host.
///
/// One production implementation exists ([`SshTransport`]); the trait seam
/// is what lets the edit tools be exercised against an in-memory fake.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Runs `command` on the remote host, bounded by `opts.timeout`.
    async fn run(&self, command: &str, opts: &RunOptions) -> Result<CommandOutput, SshError>;

    /// Copies a local file to `remote_path` on the host, overwriting it.
    async fn upload(&self, local_path: &Path, remote_path: &str) -> Result<(), SshError>;

    /// Copies `remote_path` from the host into a local file.
    async fn download(&self, remote_path: &str, local_path: &Path) -> Result<(), SshError>;

    /// Cheap connectivity check, run once at startup.
    async fn probe(&self) -> Result<(), SshError>;
}

/// Wraps an argument in single quotes for a remote POSIX shell.
pub fn escape_shell_arg(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', r#"'"'"'"#))
}

/// [`Transport`] backed by `ssh` and `scp` child processes.
pub struct SshTransport {
    host: String,
}

impl SshTransport {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    async fn run_local(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, SshError> {
        let mut cmd = Command::new(program);
        cmd.args(args).kill_on_drop(true);

        let output = tokio::time::timeout(timeout, cmd.output())
            .await
            .map_err(|_| SshError::Timeout(timeout.as_millis() as u64))?
            .map_err(|e| SshError::SpawnFailed {
                command: program.to_string(),
                message: e.to_string(),
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

#[async_trait]
impl Transport for SshTransport {
    async fn run(&self, command: &str, opts: &RunOptions) -> Result<CommandOutput, SshError> {
        let remote_command = match &opts.cwd {
            Some(cwd) => format!("cd {} && {}", escape_shell_arg(cwd), command),
            None => command.to_string(),
        };

        let args = vec![
            "-o".to_string(),
            "ConnectTimeout=10".to_string(),
            "-o".to_string(),
            "ServerAliveInterval=60".to_string(),
            "-o".to_string(),
            "ServerAliveCountMax=3".to_string(),
            self.host.clone(),
            remote_command,
        ];

        debug!(host = %self.host, %command, "running remote command");
        self.run_local("ssh", &args, opts.timeout).await
    }

    async fn upload(&self, local_path: &Path, remote_path: &str) -> Result<(), SshError> {
        let args = vec![
            local_path.to_string_lossy().into_owned(),
            format!("{}:{}", self.host, remote_path),
        ];

        debug!(host = %self.host, %remote_path, "uploading file");
        let output = self
            .run_local("scp", &args, DEFAULT_COMMAND_TIMEOUT)
            .await
            .map_err(|e| SshError::UploadFailed(e.to_string()))?;

        if output.exit_code != 0 {
            return Err(SshError::UploadFailed(output.stderr.trim().to_string()));
        }
        Ok(())
    }

    async fn download(&self, remote_path: &str, local_path: &Path) -> Result<(), SshError> {
        let args = vec![
            format!("{}:{}", self.host, remote_path),
            local_path.to_string_lossy().into_owned(),
        ];

        debug!(host = %self.host, %remote_path, "downloading file");
        let output = self
            .run_local("scp", &args, DEFAULT_COMMAND_TIMEOUT)
            .await
            .map_err(|e| SshError::DownloadFailed(e.to_string()))?;

        if output.exit_code != 0 {
            return Err(SshError::DownloadFailed(output.stderr.trim().to_string()));
        }
        Ok(())
    }

    async fn probe(&self) -> Result<(), SshError> {
        let args = vec![
            "-o".to_string(),
            "ConnectTimeout=5".to_string(),
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            self.host.clone(),
            "true".to_string(),
        ];

        let output = self
            .run_local("ssh", &args, Duration::from_secs(10))
            .await
            .map_err(|e| SshError::ConnectFailed(e.to_string()))?;

        if output.exit_code != 0 {
            return Err(SshError::ConnectFailed(output.stderr.trim().to_string()));
        }
        Ok(())
    }
}

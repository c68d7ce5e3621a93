mod args;
mod error;

pub use args::BashArgs;
pub use error::BashError;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use outpost_core::RemoteTarget;
use serde_json::Value as JsonValue;

use crate::ssh::{RunOptions, Transport};
use crate::tools::{Tool, ToolResult};

use args::MAX_TIMEOUT_MS;

/// Keeps tool results from flooding the caller's context window.
const MAX_OUTPUT_CHARS: usize = 30_000;

/// Runs a shell command on the remote host, in the target directory.
pub struct BashRemote {
    target: RemoteTarget,
    transport: Arc<dyn Transport>,
}

impl BashRemote {
    pub fn new(target: RemoteTarget, transport: Arc<dyn Transport>) -> Self {
        Self { target, transport }
    }

    async fn run(&self, args: BashArgs) -> Result<String, BashError> {
        let opts = RunOptions {
            timeout: Duration::from_millis(args.timeout.min(MAX_TIMEOUT_MS)),
            cwd: Some(self.target.path.clone()),
        };

        let result = self.transport.run(&args.command, &opts).await?;

        let mut output = result.stdout;
        if !result.stderr.is_empty() {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&result.stderr);
        }

        if output.len() > MAX_OUTPUT_CHARS {
            output.truncate(truncation_boundary(&output, MAX_OUTPUT_CHARS));
            output.push_str("\n[Output truncated...]");
        }

        if result.exit_code != 0 {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("[Exit code: {}]", result.exit_code));
        }

        if output.is_empty() {
            output = "Command executed successfully (no output)".to_string();
        }
        Ok(output)
    }
}

/// Largest char boundary at or below `limit`.
fn truncation_boundary(s: &str, limit: usize) -> usize {
    let mut cut = limit.min(s.len());
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    cut
}

#[async_trait]
impl Tool for BashRemote {
    fn name(&self) -> &'static str {
        "BashRemote"
    }

    fn description(&self) -> &'static str {
        "Executes a given bash command on the remote host with an optional timeout.\n\
         \n\
         Usage notes:\n\
         - The command argument is required\n\
         - You can specify an optional timeout in milliseconds (up to 600000ms / 10 minutes). If not specified, commands will timeout after 120000ms (2 minutes)\n\
         - Always quote file paths that contain spaces with double quotes\n\
         - If the output exceeds 30000 characters, output will be truncated\n\
         - Avoid using search commands like `find` and `grep` here; use GrepRemote or GlobRemote instead\n\
         - When issuing multiple commands, use the ';' or '&&' operator to separate them\n\
         - Commands run in the target directory; use absolute paths to work elsewhere"
    }

    fn parameters_schema(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "command": {
                    "type": "string",
                    "description": "The command to execute"
                },
                "description": {
                    "type": "string",
                    "description": "Clear, concise description of what this command does in 5-10 words"
                },
                "timeout": {
                    "type": "number",
                    "description": "Optional timeout in milliseconds (max 600000)",
                    "maximum": 600000
                }
            },
            "required": ["command"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: JsonValue) -> ToolResult {
        let tool_args: BashArgs = serde_json::from_value(args)?;
        Ok(self.run(tool_args).await?)
    }
}

mod args;
mod error;

pub use args::LsArgs;
pub use error::LsError;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::ssh::{escape_shell_arg, RunOptions, Transport};
use crate::tools::{Tool, ToolResult};

/// Lists a remote directory with `ls -la`, optionally filtering entries
/// matching caller-supplied ignore globs.
pub struct LsRemote {
    transport: Arc<dyn Transport>,
}

impl LsRemote {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn build_command(args: &LsArgs) -> String {
        let path = escape_shell_arg(&args.path);
        if args.ignore.is_empty() {
            format!("ls -la {path}")
        } else {
            // Ignore globs become a grep -v alternation; '*' widens to '.*'.
            let filter = args
                .ignore
                .iter()
                .map(|p| p.replace('*', ".*"))
                .collect::<Vec<_>>()
                .join("|");
            format!("ls -la {path} | grep -v -E '{filter}'")
        }
    }

    async fn list(&self, args: LsArgs) -> Result<String, LsError> {
        let command = Self::build_command(&args);
        let result = self
            .transport
            .run(&command, &RunOptions::default())
            .await?;

        if result.stderr.contains("No such file or directory") {
            return Err(LsError::DirectoryNotFound(args.path));
        }

        if result.stdout.is_empty() {
            return Ok("Directory is empty".to_string());
        }
        Ok(result.stdout)
    }
}

#[async_trait]
impl Tool for LsRemote {
    fn name(&self) -> &'static str {
        "LSRemote"
    }

    fn description(&self) -> &'static str {
        "Lists files and directories in a given path on the remote host. You can optionally provide an \
         array of glob patterns to ignore with the ignore parameter. You should generally prefer the \
         GlobRemote and GrepRemote tools, if you know which directories to search."
    }

    fn parameters_schema(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "The absolute path to the directory to list on the remote host (must be absolute, not relative)"
                },
                "ignore": {
                    "type": "array",
                    "description": "List of glob patterns to ignore",
                    "items": { "type": "string" }
                }
            },
            "required": ["path"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: JsonValue) -> ToolResult {
        let tool_args: LsArgs = serde_json::from_value(args)?;
        Ok(self.list(tool_args).await?)
    }
}

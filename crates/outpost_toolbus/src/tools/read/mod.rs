mod args;
mod error;

pub use args::ReadArgs;
pub use error::ReadError;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::ssh::{escape_shell_arg, RunOptions, Transport};
use crate::tools::{Tool, ToolResult};

use args::DEFAULT_LINE_LIMIT;

/// Reads a remote file through `cat -n`, so output arrives already
/// line-numbered.
pub struct ReadRemote {
    transport: Arc<dyn Transport>,
}

impl ReadRemote {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    fn build_command(args: &ReadArgs) -> String {
        let path = escape_shell_arg(&args.file_path);
        match (args.offset, args.limit) {
            (Some(offset), Some(limit)) => {
                let end = offset + limit - 1;
                format!("sed -n '{offset},{end}p' {path} | cat -n")
            }
            (None, Some(limit)) => format!("head -n {limit} {path} | cat -n"),
            _ => format!("head -n {DEFAULT_LINE_LIMIT} {path} | cat -n"),
        }
    }

    async fn read(&self, args: ReadArgs) -> Result<String, ReadError> {
        let command = Self::build_command(&args);
        let result = self
            .transport
            .run(&command, &RunOptions::default())
            .await?;

        if result.stderr.contains("No such file or directory") {
            return Err(ReadError::FileNotFound(args.file_path));
        }

        if result.stdout.trim().is_empty() {
            return Ok(format!(
                "File exists but has empty contents: {}",
                args.file_path
            ));
        }

        Ok(result.stdout)
    }
}

#[async_trait]
impl Tool for ReadRemote {
    fn name(&self) -> &'static str {
        "ReadRemote"
    }

    fn description(&self) -> &'static str {
        "Reads a file from the remote filesystem. You can access any file on the remote host with this tool.\n\
         \n\
         Usage:\n\
         - The file_path parameter must be an absolute path on the remote host\n\
         - By default, it reads up to 2000 lines starting from the beginning of the file\n\
         - You can optionally specify a line offset and limit (handy for long files)\n\
         - Results are returned using cat -n format, with line numbers starting at 1"
    }

    fn parameters_schema(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The absolute path to the file to read on the remote host"
                },
                "offset": {
                    "type": "number",
                    "description": "The line number to start reading from. Only provide if the file is too large to read at once"
                },
                "limit": {
                    "type": "number",
                    "description": "The number of lines to read. Only provide if the file is too large to read at once."
                }
            },
            "required": ["file_path"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: JsonValue) -> ToolResult {
        let tool_args: ReadArgs = serde_json::from_value(args)?;
        Ok(self.read(tool_args).await?)
    }
}

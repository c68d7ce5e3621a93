mod args;
mod error;

pub use args::GlobArgs;
pub use error::GlobError;

use std::sync::Arc;

use async_trait::async_trait;
use outpost_core::RemoteTarget;
use serde_json::Value as JsonValue;

use crate::ssh::{escape_shell_arg, RunOptions, Transport};
use crate::tools::{Tool, ToolResult};

/// Finds remote files by name pattern using `find`.
///
/// Recursive `**` patterns are reduced to a match on the final filename
/// component searched at any depth. That approximates, but does not fully
/// implement, glob semantics: the directory components of a `**` pattern
/// are not enforced.
pub struct GlobRemote {
    target: RemoteTarget,
    transport: Arc<dyn Transport>,
}

impl GlobRemote {
    pub fn new(target: RemoteTarget, transport: Arc<dyn Transport>) -> Self {
        Self { target, transport }
    }

    fn build_command(pattern: &str, working_dir: &str) -> String {
        let dir = escape_shell_arg(working_dir);
        if pattern.contains("**") {
            let simplified = pattern.replace("**", "*");
            let file_name = simplified.rsplit('/').next().unwrap_or("*");
            format!(
                "cd {dir} && find . -type f -name {} | sort -t/ -k2",
                escape_shell_arg(file_name)
            )
        } else {
            let max_depth = if pattern.contains('/') { 10 } else { 1 };
            format!(
                "cd {dir} && find . -maxdepth {max_depth} -type f -name {} | sort",
                escape_shell_arg(pattern)
            )
        }
    }

    async fn search(&self, args: GlobArgs) -> Result<String, GlobError> {
        let working_dir = args.path.as_deref().unwrap_or(&self.target.path);
        let command = Self::build_command(&args.pattern, working_dir);
        let result = self
            .transport
            .run(&command, &RunOptions::default())
            .await?;

        if result.stdout.trim().is_empty() {
            return Ok(format!(
                "No files found matching pattern: {}",
                args.pattern
            ));
        }

        let files = result
            .stdout
            .trim()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let cleaned = line.strip_prefix("./").unwrap_or(line);
                if working_dir == "/" {
                    format!("/{cleaned}")
                } else {
                    format!("{working_dir}/{cleaned}")
                }
            })
            .collect::<Vec<_>>();

        Ok(files.join("\n"))
    }
}

#[async_trait]
impl Tool for GlobRemote {
    fn name(&self) -> &'static str {
        "GlobRemote"
    }

    fn description(&self) -> &'static str {
        "Fast file pattern matching tool that works with any codebase size on the remote host.\n\
         - Supports glob patterns like \"**/*.js\" or \"src/**/*.ts\"\n\
         - Recursive ** patterns are matched by filename at any depth, not by full path\n\
         - Returns matching file paths as absolute paths on the remote host\n\
         - Use this tool when you need to find files by name patterns on the remote host"
    }

    fn parameters_schema(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "pattern": {
                    "type": "string",
                    "description": "The glob pattern to match files against"
                },
                "path": {
                    "type": "string",
                    "description": "The directory to search in on the remote host. If not specified, the target path will be used. Must be a valid directory path if provided."
                }
            },
            "required": ["pattern"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: JsonValue) -> ToolResult {
        let tool_args: GlobArgs = serde_json::from_value(args)?;
        Ok(self.search(tool_args).await?)
    }
}

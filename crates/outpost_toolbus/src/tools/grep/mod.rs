mod args;
mod error;

pub use args::{GrepArgs, OutputMode};
pub use error::GrepError;

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use outpost_core::RemoteTarget;
use serde_json::Value as JsonValue;

use crate::ssh::{escape_shell_arg, RunOptions, Transport};
use crate::tools::{Tool, ToolResult};

/// Content search over the remote tree, delegated to `rg` on the host.
pub struct GrepRemote {
    target: RemoteTarget,
    transport: Arc<dyn Transport>,
}

impl GrepRemote {
    pub fn new(target: RemoteTarget, transport: Arc<dyn Transport>) -> Self {
        Self { target, transport }
    }

    fn build_command(args: &GrepArgs, search_path: &str) -> String {
        let mut command = String::from("rg");

        if args.case_insensitive {
            command.push_str(" -i");
        }
        if args.multiline {
            command.push_str(" -U --multiline-dotall");
        }

        match args.output_mode {
            OutputMode::FilesWithMatches => command.push_str(" -l"),
            OutputMode::Count => command.push_str(" -c"),
            OutputMode::Content => {
                if args.line_numbers {
                    command.push_str(" -n");
                }
                if let Some(context) = args.context {
                    let _ = write!(command, " -C {context}");
                } else {
                    if let Some(after) = args.after_context {
                        let _ = write!(command, " -A {after}");
                    }
                    if let Some(before) = args.before_context {
                        let _ = write!(command, " -B {before}");
                    }
                }
            }
        }

        if let Some(file_type) = &args.file_type {
            let _ = write!(command, " --type {}", escape_shell_arg(file_type));
        }
        if let Some(glob) = &args.glob {
            let _ = write!(command, " --glob {}", escape_shell_arg(glob));
        }

        let _ = write!(
            command,
            " {} {}",
            escape_shell_arg(&args.pattern),
            escape_shell_arg(search_path)
        );

        if let Some(limit) = args.head_limit {
            let _ = write!(command, " | head -n {limit}");
        }

        command
    }

    async fn search(&self, args: GrepArgs) -> Result<String, GrepError> {
        let search_path = args
            .path
            .clone()
            .unwrap_or_else(|| self.target.path.clone());
        let command = Self::build_command(&args, &search_path);
        let result = self
            .transport
            .run(&command, &RunOptions::default())
            .await?;

        if result.stdout.trim().is_empty() {
            if result.stderr.contains("No such file or directory") {
                return Err(GrepError::SearchPathNotFound(search_path));
            }
            return Ok(format!("No matches found for pattern: {}", args.pattern));
        }

        Ok(result.stdout)
    }
}

#[async_trait]
impl Tool for GrepRemote {
    fn name(&self) -> &'static str {
        "GrepRemote"
    }

    fn description(&self) -> &'static str {
        "A powerful search tool built on ripgrep for the remote host.\n\
         \n\
         Usage:\n\
         - ALWAYS use GrepRemote for search tasks on the remote host. NEVER invoke `grep` or `rg` as a BashRemote command\n\
         - Supports full regex syntax (e.g., \"log.*Error\", \"function\\s+\\w+\")\n\
         - Filter files with the glob parameter (e.g., \"*.js\", \"**/*.tsx\") or the type parameter (e.g., \"js\", \"py\", \"rust\")\n\
         - Output modes: \"content\" shows matching lines, \"files_with_matches\" shows only file paths (default), \"count\" shows match counts\n\
         - Pattern syntax follows ripgrep (not grep): literal braces need escaping\n\
         - By default patterns match within single lines only; for cross-line patterns use multiline: true"
    }

    fn parameters_schema(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "pattern": {
                    "type": "string",
                    "description": "The regular expression pattern to search for in file contents"
                },
                "path": {
                    "type": "string",
                    "description": "File or directory to search in on the remote host. Defaults to the target path."
                },
                "glob": {
                    "type": "string",
                    "description": "Glob pattern to filter files (e.g. \"*.js\", \"*.{ts,tsx}\") - maps to rg --glob"
                },
                "type": {
                    "type": "string",
                    "description": "File type to search (rg --type). Common types: js, py, rust, go, java, etc. More efficient than glob for standard file types."
                },
                "output_mode": {
                    "type": "string",
                    "enum": ["content", "files_with_matches", "count"],
                    "description": "Output mode: \"content\" shows matching lines (supports -A/-B/-C context, -n line numbers, head_limit), \"files_with_matches\" shows file paths (supports head_limit), \"count\" shows match counts (supports head_limit). Defaults to \"files_with_matches\"."
                },
                "-i": {
                    "type": "boolean",
                    "description": "Case insensitive search (rg -i)"
                },
                "-n": {
                    "type": "boolean",
                    "description": "Show line numbers in output (rg -n). Requires output_mode: \"content\", ignored otherwise."
                },
                "-A": {
                    "type": "number",
                    "description": "Number of lines to show after each match (rg -A). Requires output_mode: \"content\", ignored otherwise."
                },
                "-B": {
                    "type": "number",
                    "description": "Number of lines to show before each match (rg -B). Requires output_mode: \"content\", ignored otherwise."
                },
                "-C": {
                    "type": "number",
                    "description": "Number of lines to show before and after each match (rg -C). Requires output_mode: \"content\", ignored otherwise."
                },
                "multiline": {
                    "type": "boolean",
                    "description": "Enable multiline mode where . matches newlines and patterns can span lines (rg -U --multiline-dotall). Default: false."
                },
                "head_limit": {
                    "type": "number",
                    "description": "Limit output to first N lines/entries, equivalent to \"| head -N\". Works across all output modes. When unspecified, shows all results from ripgrep."
                }
            },
            "required": ["pattern"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: JsonValue) -> ToolResult {
        let tool_args: GrepArgs = serde_json::from_value(args)?;
        Ok(self.search(tool_args).await?)
    }
}

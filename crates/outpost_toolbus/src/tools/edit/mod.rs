mod args;
mod error;

pub use args::EditArgs;
pub use error::EditError;

use std::sync::Arc;

use async_trait::async_trait;
use outpost_core::RemoteTarget;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::matcher;
use crate::ssh::{StagedFile, Transport};
use crate::tools::{Tool, ToolResult};

/// Exact string replacement in one remote file.
///
/// The file is downloaded whole, mutated locally, and uploaded whole; the
/// remote side is only ever written once, after every check has passed.
/// A non-`replace_all` edit whose `old_string` matches more than once is
/// rejected with the occurrence count rather than silently picking one.
pub struct EditRemote {
    target: RemoteTarget,
    transport: Arc<dyn Transport>,
}

impl EditRemote {
    pub fn new(target: RemoteTarget, transport: Arc<dyn Transport>) -> Self {
        Self { target, transport }
    }

    async fn apply(&self, args: EditArgs) -> Result<String, EditError> {
        if args.old_string == args.new_string {
            return Err(EditError::InvalidEdit);
        }

        let download = StagedFile::empty().await?;
        self.transport
            .download(&args.file_path, download.path())
            .await?;
        let content = download.read_to_string().await?;

        if !content.contains(&args.old_string) {
            return Err(EditError::NotFound(args.old_string));
        }

        if !args.replace_all {
            let occurrences = matcher::count_occurrences(&content, &args.old_string);
            if occurrences > 1 {
                return Err(EditError::AmbiguousMatch(occurrences));
            }
        }

        let new_content = matcher::replace(
            &content,
            &args.old_string,
            &args.new_string,
            args.replace_all,
        );

        let upload = StagedFile::create(&new_content).await?;
        self.transport.upload(upload.path(), &args.file_path).await?;

        debug!(host = %self.target.host, file = %args.file_path, "edited remote file");
        Ok(format!(
            "The file {} has been updated. Here's the result of running `cat -n` on a snippet of the edited file:\n{}",
            args.file_path,
            snippet_around(&new_content, &args.new_string)
        ))
    }
}

/// Renders the replacement site with up to two lines of context on either
/// side, numbered like `cat -n`.
fn snippet_around(content: &str, new_string: &str) -> String {
    let needle = new_string.lines().next().unwrap_or("");
    let lines: Vec<&str> = content.lines().collect();

    let Some(target_line) = lines.iter().position(|line| line.contains(needle)) else {
        return String::new();
    };

    let start = target_line.saturating_sub(2);
    let end = (target_line + 3).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(offset, line)| format!("{:>5}→{}", start + offset + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl Tool for EditRemote {
    fn name(&self) -> &'static str {
        "EditRemote"
    }

    fn description(&self) -> &'static str {
        "Performs exact string replacements in files on the remote host.\n\
         \n\
         Usage:\n\
         - When editing text from ReadRemote output, preserve the exact indentation as it appears AFTER the line number prefix\n\
         - The edit will FAIL if old_string is not unique in the file. Either provide a larger string with more surrounding context to make it unique or use replace_all to change every instance\n\
         - Use replace_all for replacing and renaming strings across the file, for instance when renaming a variable"
    }

    fn parameters_schema(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The absolute path to the file to modify on the remote host"
                },
                "old_string": {
                    "type": "string",
                    "description": "The text to replace"
                },
                "new_string": {
                    "type": "string",
                    "description": "The text to replace it with (must be different from old_string)"
                },
                "replace_all": {
                    "type": "boolean",
                    "description": "Replace all occurrences of old_string (default false)",
                    "default": false
                }
            },
            "required": ["file_path", "old_string", "new_string"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: JsonValue) -> ToolResult {
        let tool_args: EditArgs = serde_json::from_value(args)?;
        Ok(self.apply(tool_args).await?)
    }
}

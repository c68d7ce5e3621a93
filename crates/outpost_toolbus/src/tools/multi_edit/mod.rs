mod args;
mod error;

pub use args::{EditOperation, MultiEditArgs};
pub use error::MultiEditError;

use std::sync::Arc;

use async_trait::async_trait;
use outpost_core::RemoteTarget;
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::matcher;
use crate::ssh::{StagedFile, Transport};
use crate::tools::{Tool, ToolResult};

/// An ordered sequence of exact replacements applied to one remote file as
/// a unit.
///
/// The file is downloaded once and every edit is validated and applied
/// against the in-memory working copy, each one seeing the cumulative
/// result of its predecessors. Only after the whole sequence has applied
/// is the file uploaded, once. The remote has no transaction mechanism, so
/// this deferred single write is what makes the sequence atomic: any
/// rejected edit leaves the remote file untouched.
pub struct MultiEditRemote {
    target: RemoteTarget,
    transport: Arc<dyn Transport>,
}

impl MultiEditRemote {
    pub fn new(target: RemoteTarget, transport: Arc<dyn Transport>) -> Self {
        Self { target, transport }
    }

    async fn apply(&self, args: MultiEditArgs) -> Result<String, MultiEditError> {
        if args.edits.is_empty() {
            return Err(MultiEditError::Empty);
        }

        let download = StagedFile::empty().await?;
        self.transport
            .download(&args.file_path, download.path())
            .await?;
        let mut content = download.read_to_string().await?;

        for (i, edit) in args.edits.iter().enumerate() {
            let index = i + 1;

            if edit.old_string == edit.new_string {
                return Err(MultiEditError::InvalidEdit { index });
            }

            if !content.contains(&edit.old_string) {
                return Err(MultiEditError::NotFound {
                    index,
                    old: edit.old_string.clone(),
                });
            }

            if !edit.replace_all {
                let count = matcher::count_occurrences(&content, &edit.old_string);
                if count > 1 {
                    return Err(MultiEditError::AmbiguousMatch { index, count });
                }
            }

            content = matcher::replace(
                &content,
                &edit.old_string,
                &edit.new_string,
                edit.replace_all,
            );
        }

        let upload = StagedFile::create(&content).await?;
        self.transport.upload(upload.path(), &args.file_path).await?;

        debug!(
            host = %self.target.host,
            file = %args.file_path,
            edits = args.edits.len(),
            "applied edit sequence to remote file"
        );
        Ok(format!(
            "Successfully applied {} edits to {}",
            args.edits.len(),
            args.file_path
        ))
    }
}

#[async_trait]
impl Tool for MultiEditRemote {
    fn name(&self) -> &'static str {
        "MultiEditRemote"
    }

    fn description(&self) -> &'static str {
        "Makes multiple edits to a single file on the remote host in one operation. Built on top of \
         EditRemote for performing several find-and-replace operations efficiently.\n\
         \n\
         Provide file_path and an edits array where each edit contains old_string, new_string, and an \
         optional replace_all flag.\n\
         \n\
         IMPORTANT:\n\
         - All edits are applied in sequence, in the order they are provided\n\
         - Each edit operates on the result of the previous edit\n\
         - The edits are atomic: either all succeed or none are applied\n\
         - Plan your edits carefully to avoid conflicts between sequential operations"
    }

    fn parameters_schema(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The absolute path to the file to modify on the remote host"
                },
                "edits": {
                    "type": "array",
                    "description": "Array of edit operations to perform sequentially on the file",
                    "minItems": 1,
                    "items": {
                        "type": "object",
                        "properties": {
                            "old_string": {
                                "type": "string",
                                "description": "The text to replace"
                            },
                            "new_string": {
                                "type": "string",
                                "description": "The text to replace it with"
                            },
                            "replace_all": {
                                "type": "boolean",
                                "description": "Replace all occurrences of old_string (default false)",
                                "default": false
                            }
                        },
                        "required": ["old_string", "new_string"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["file_path", "edits"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: JsonValue) -> ToolResult {
        let tool_args: MultiEditArgs = serde_json::from_value(args)?;
        Ok(self.apply(tool_args).await?)
    }
}

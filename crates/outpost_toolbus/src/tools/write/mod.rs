mod args;
mod error;

pub use args::WriteArgs;
pub use error::WriteError;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::ssh::{StagedFile, Transport};
use crate::tools::{Tool, ToolResult};

/// Writes a whole file to the remote host, overwriting any existing file at
/// that path. Content is staged locally and shipped in one upload.
pub struct WriteRemote {
    transport: Arc<dyn Transport>,
}

impl WriteRemote {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn write(&self, args: WriteArgs) -> Result<String, WriteError> {
        let staged = StagedFile::create(&args.content).await?;
        self.transport.upload(staged.path(), &args.file_path).await?;
        Ok(format!("File created successfully at: {}", args.file_path))
    }
}

#[async_trait]
impl Tool for WriteRemote {
    fn name(&self) -> &'static str {
        "WriteRemote"
    }

    fn description(&self) -> &'static str {
        "Writes a file to the remote filesystem.\n\
         \n\
         Usage:\n\
         - This tool will overwrite the existing file if there is one at the provided path\n\
         - If this is an existing file, you MUST use the ReadRemote tool first to read its contents\n\
         - ALWAYS prefer editing existing files; never write new files unless explicitly required"
    }

    fn parameters_schema(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "The absolute path to the file to write on the remote host"
                },
                "content": {
                    "type": "string",
                    "description": "The content to write to the file"
                }
            },
            "required": ["file_path", "content"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, args: JsonValue) -> ToolResult {
        let tool_args: WriteArgs = serde_json::from_value(args)?;
        Ok(self.write(tool_args).await?)
    }
}

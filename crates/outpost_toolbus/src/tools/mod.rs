pub mod bash;
pub mod edit;
pub mod glob;
pub mod grep;
pub mod ls;
pub mod multi_edit;
pub mod read;
pub mod write;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

pub use bash::{BashArgs, BashError, BashRemote};
pub use edit::{EditArgs, EditError, EditRemote};
pub use glob::{GlobArgs, GlobError, GlobRemote};
pub use grep::{GrepArgs, GrepError, GrepRemote, OutputMode};
pub use ls::{LsArgs, LsError, LsRemote};
pub use multi_edit::{EditOperation, MultiEditArgs, MultiEditError, MultiEditRemote};
pub use read::{ReadArgs, ReadError, ReadRemote};
pub use write::{WriteArgs, WriteError, WriteRemote};

/// Tools produce human-readable text for the protocol's content array.
pub type ToolResult = anyhow::Result<String>;

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn parameters_schema(&self) -> JsonValue;
    async fn execute(&self, args: JsonValue) -> ToolResult;
}

pub mod matcher;
pub mod mcp;
pub mod ssh;
pub mod tools;


use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use outpost_core::RemoteTarget;
use serde_json::Value as JsonValue;

pub use mcp::McpServer;
pub use ssh::{SshError, SshTransport, StagedFile, Transport};
pub use tools::{
    BashArgs, BashError, BashRemote, EditArgs, EditError, EditOperation, EditRemote, GlobArgs,
    GlobError, GlobRemote, GrepArgs, GrepError, GrepRemote, LsArgs, LsError, LsRemote,
    MultiEditArgs, MultiEditError, MultiEditRemote, ReadArgs, ReadError, ReadRemote, Tool,
    ToolResult, WriteArgs, WriteError, WriteRemote,
};

/// Registry of the tools served for one remote target.
///
/// Every registered tool shares the same target and transport; nothing is
/// coordinated across calls, and nothing persists between them.
pub struct ToolBus {
    target: RemoteTarget,
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolBus {
    /// Builds the standard bus, talking to the target over `ssh`/`scp`.
    pub fn new(target: RemoteTarget) -> Self {
        let transport = Arc::new(SshTransport::new(target.host.clone()));
        Self::with_transport(target, transport)
    }

    /// Builds the standard bus over a caller-supplied transport.
    pub fn with_transport(target: RemoteTarget, transport: Arc<dyn Transport>) -> Self {
        let mut bus = Self {
            target,
            tools: HashMap::new(),
        };
        bus.register_defaults(transport);
        bus
    }

    fn register_defaults(&mut self, transport: Arc<dyn Transport>) {
        self.register(BashRemote::new(self.target.clone(), Arc::clone(&transport)));
        self.register(ReadRemote::new(Arc::clone(&transport)));
        self.register(WriteRemote::new(Arc::clone(&transport)));
        self.register(EditRemote::new(self.target.clone(), Arc::clone(&transport)));
        self.register(MultiEditRemote::new(
            self.target.clone(),
            Arc::clone(&transport),
        ));
        self.register(LsRemote::new(Arc::clone(&transport)));
        self.register(GlobRemote::new(self.target.clone(), Arc::clone(&transport)));
        self.register(GrepRemote::new(self.target.clone(), transport));
    }

    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Arc::new(tool));
    }

    /// Dispatches one tool call, reporting its wall-clock duration.
    pub async fn call(&self, tool_name: &str, args: JsonValue) -> Result<(String, u64)> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| anyhow!("Unknown tool: {}", tool_name))?;

        let start = Instant::now();
        let result = tool.execute(args).await?;
        let duration_ms = start.elapsed().as_millis() as u64;

        Ok((result, duration_ms))
    }

    pub fn list_tools(&self) -> Vec<ToolInfo> {
        let mut tools: Vec<ToolInfo> = self
            .tools
            .values()
            .map(|t| ToolInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters_schema(),
            })
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub fn target(&self) -> &RemoteTarget {
        &self.target
    }
}

#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub parameters: JsonValue,
}

//! Stdio serve loop.
//!
//! Reads newline-delimited JSON-RPC requests from stdin and writes one
//! response per line to stdout. Tool failures are reported as
//! `CallToolResult` values with the error flag set, never as JSON-RPC
//! errors: a failed edit is a result the caller is expected to read and
//! correct, not a protocol fault.

use serde_json::Value as JsonValue;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::mcp::error::McpError;
use crate::mcp::protocol::{
    error_codes, CallToolRequest, CallToolResult, Implementation, InitializeResult,
    JsonRpcErrorObject, JsonRpcResponse, ListToolsResult, ServerCapabilities, ToolDescriptor,
};
use crate::ToolBus;

pub struct McpServer {
    bus: ToolBus,
    server_info: Implementation,
}

impl McpServer {
    pub fn new(bus: ToolBus) -> Self {
        Self {
            bus,
            server_info: Implementation::new("outpost", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Serves requests until stdin closes.
    pub async fn serve_stdio(self) -> Result<(), McpError> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!(target_host = %self.bus.target().host, "serving MCP on stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line).await {
                let mut frame = serde_json::to_string(&response)?;
                frame.push('\n');
                stdout.write_all(frame.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handles one request frame. Returns `None` for notifications, which
    /// get no response.
    pub(crate) async fn handle_line(&self, line: &str) -> Option<JsonValue> {
        let request: JsonValue = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "unparseable request frame");
                return Some(error_response(
                    JsonValue::Null,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let method = request.get("method").and_then(JsonValue::as_str);
        let id = request.get("id").cloned();
        let params = request.get("params").cloned();

        let Some(method) = method else {
            return Some(error_response(
                id.unwrap_or(JsonValue::Null),
                error_codes::INVALID_REQUEST,
                "Missing method",
            ));
        };

        // Notifications carry no id and expect no response.
        let Some(id) = id else {
            debug!(%method, "notification received");
            return None;
        };

        debug!(%method, "handling request");
        Some(match method {
            "initialize" => {
                let result = InitializeResult::new(
                    ServerCapabilities::tools_only(),
                    self.server_info.clone(),
                );
                success_response(id, &result)
            }
            "ping" => success_response(id, &serde_json::json!({})),
            "tools/list" => {
                let tools = self
                    .bus
                    .list_tools()
                    .into_iter()
                    .map(|info| ToolDescriptor::new(info.name, info.description, info.parameters))
                    .collect();
                success_response(id, &ListToolsResult::new(tools))
            }
            "tools/call" => {
                let call: CallToolRequest =
                    match serde_json::from_value(params.unwrap_or(JsonValue::Null)) {
                        Ok(call) => call,
                        Err(e) => {
                            return Some(error_response(
                                id,
                                error_codes::INVALID_PARAMS,
                                format!("Invalid tools/call params: {e}"),
                            ));
                        }
                    };

                let args = call.arguments.unwrap_or_else(|| serde_json::json!({}));
                let result = match self.bus.call(&call.name, args).await {
                    Ok((text, duration_ms)) => {
                        debug!(tool = %call.name, duration_ms, "tool call succeeded");
                        CallToolResult::text(text)
                    }
                    Err(e) => {
                        debug!(tool = %call.name, error = %e, "tool call failed");
                        CallToolResult::error(e.to_string())
                    }
                };
                success_response(id, &result)
            }
            other => error_response(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Unknown method: {other}"),
            ),
        })
    }
}

fn success_response<T: serde::Serialize>(id: JsonValue, result: &T) -> JsonValue {
    let result = serde_json::to_value(result).unwrap_or(JsonValue::Null);
    serde_json::to_value(JsonRpcResponse::success(id, result)).unwrap_or(JsonValue::Null)
}

fn error_response(id: JsonValue, code: i32, message: impl Into<String>) -> JsonValue {
    serde_json::to_value(JsonRpcResponse::<JsonValue>::error(
        id,
        JsonRpcErrorObject::new(code, message),
    ))
    .unwrap_or(JsonValue::Null)
}

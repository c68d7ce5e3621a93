//! Model Context Protocol (MCP) support.
//!
//! The server speaks JSON-RPC 2.0 over stdio, one JSON object per line:
//! stdin carries requests, stdout carries responses, and all logging goes
//! to stderr so the protocol channel stays clean.
//!
//! - **protocol**: JSON-RPC and MCP message types
//! - **server**: the stdio serve loop dispatching into the tool bus
//! - **error**: error types for protocol operations

pub mod error;
pub mod protocol;
pub mod server;

pub use error::{McpError, McpResult};
pub use protocol::{
    error_codes, CallToolRequest, CallToolResult, Content, Implementation, InitializeResult,
    JsonRpcErrorObject, JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities,
    ToolDescriptor, ToolsCapability,
};
pub use server::McpServer;

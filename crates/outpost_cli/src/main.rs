//! CLI entry point for outpost.

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use outpost_core::RemoteTarget;
use outpost_toolbus::mcp::McpServer;
use outpost_toolbus::ssh::{SshTransport, Transport};
use outpost_toolbus::ToolBus;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Stdout carries the protocol, so all diagnostics go to stderr.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let target = RemoteTarget::parse(&cli.target)
        .context("expected a target like myserver:/home/user/project")?;

    let transport = Arc::new(SshTransport::new(target.host.clone()));
    transport
        .probe()
        .await
        .with_context(|| format!("cannot reach {}", target.host))?;
    info!(host = %target.host, path = %target.path, "connected to remote target");

    let bus = ToolBus::with_transport(target, transport);
    McpServer::new(bus).serve_stdio().await?;
    Ok(())
}

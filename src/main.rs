use clap::Parser;
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use submagic_mcp::cli::Cli;
use submagic_mcp::config::{self, ServerContext};
use submagic_mcp::server::SubmagicServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("submagic_mcp=info,warn"));

    // stdout carries the MCP wire protocol; logs go to stderr.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // No tool can function without a credential, so refuse to start.
    config::api_key()?;

    let ctx = ServerContext::new(cli.base_url);
    info!(base_url = %ctx.base_url, "starting Submagic MCP server on stdio");

    let service = SubmagicServer::new(&ctx)
        .serve(rmcp::transport::io::stdio())
        .await?;
    service.waiting().await?;

    Ok(())
}

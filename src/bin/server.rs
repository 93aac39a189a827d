//! Trello MCP server binary.
//!
//! Loads credentials, builds the one `TrelloClient` and serves the MCP
//! facade over stdio. Logs go to stderr so stdout stays protocol-only.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use miette::Diagnostic;
use rmcp::ServiceExt;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trello_mcp::config::Config;
use trello_mcp::mcp::TrelloMcpServer;
use trello_mcp::trello::{TrelloClient, TrelloError};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Trello(#[from] TrelloError),

    #[error("Failed to start MCP server: {0}")]
    #[diagnostic(code(trello_mcp::binary::serve))]
    Serve(String),

    #[error("MCP server task failed: {0}")]
    #[diagnostic(code(trello_mcp::binary::join))]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Parser)]
#[command(name = "trello-mcp")]
#[command(author, version, about = "Trello MCP server (stdio)", long_about = None)]
struct Cli {
    /// Env file seeding TRELLO_API_KEY / TRELLO_API_TOKEN (process env wins)
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Override the Trello API root
    #[arg(long, env = "TRELLO_API_URL")]
    api_url: Option<String>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trello_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<(), BinaryError> {
    let mut config = Config::load(&cli.env_file)?;
    if let Some(api_url) = cli.api_url {
        config = config.with_base_url(api_url);
    }

    let client = Arc::new(TrelloClient::from_config(&config)?);
    info!(base_url = client.base_url(), "Trello client ready");

    let service = TrelloMcpServer::new(Arc::clone(&client))
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| BinaryError::Serve(e.to_string()))?;
    info!("MCP server listening on stdio");

    let reason = service.waiting().await?;
    info!(?reason, "MCP server stopped");

    if !client.release() {
        warn!("Trello client still in use at shutdown; connections close on drop");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    init_tracing();
    run(Cli::parse()).await?;
    Ok(())
}

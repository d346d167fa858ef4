mod assistant;
mod cli;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::llm_client::{CompletionClient, DEFAULT_MODEL};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on a missing API key)
    let config = Config::from_env()?;

    // Logs go to stderr so they never interleave with the interactive menu
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting HireSense AI v{}", env!("CARGO_PKG_VERSION"));

    let llm = CompletionClient::from_env()?;
    info!(
        "Completion client initialized (endpoint: {}, default model: {})",
        llm.endpoint(),
        DEFAULT_MODEL
    );

    match cli.command {
        Command::Serve { port } => serve(llm, port.unwrap_or(config.port)).await,
        Command::Interactive => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            cli::run_menu(&llm, &mut input, &mut output).await
        }
    }
}

async fn serve(llm: CompletionClient, port: u16) -> Result<()> {
    let app = build_router(AppState { llm })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

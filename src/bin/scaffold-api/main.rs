//! # Scaffold API Server CLI
//!
//! Command-line interface for the scaffold API server.
//!
//! Loads optional service metadata, builds the router and serves it until the
//! process is stopped.

use std::io;
use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use scaffold_api::http::{build_router, AppState};
use scaffold_api::ServiceInfo;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize logging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let info = if let Some(path) = &cli.config {
        ServiceInfo::load_from_path(path)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
    } else {
        ServiceInfo::default()
    };
    let info = info.with_overrides(cli.title, cli.description, cli.api_version);

    let state = AppState::builder()
        .with_info(info)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    tracing::debug!(title = %state.info.title, version = %state.info.version, "service metadata");

    let app = build_router(state);

    let addr: SocketAddr = cli.listen.parse().map_err(io::Error::other)?;
    tracing::info!("starting scaffold-api on http://{addr}, docs at http://{addr}/docs");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

//! Command-line interface definitions for the scaffold API server.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the scaffold API server.
///
/// Metadata flags are applied on top of the values loaded from `--config`.
#[derive(Debug, Parser)]
#[command(name = "scaffold-api")]
#[command(author, version, about = "Minimal HTTP API scaffold serving sample items and users")]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8000")]
    pub listen: String,

    /// Path to YAML file with service metadata (title, description, version)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Service title shown in the API documentation
    #[arg(long)]
    pub title: Option<String>,

    /// Service description shown in the API documentation
    #[arg(long)]
    pub description: Option<String>,

    /// API version shown in the API documentation
    #[arg(long)]
    pub api_version: Option<String>,
}

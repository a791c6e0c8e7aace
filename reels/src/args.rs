use std::path::PathBuf;

use clap::Parser;

/// ResearchReels server
#[derive(Debug, Parser)]
#[command(name = "reels", about = "Turn a research topic into narrated, illustrated reels")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "reels.toml", env = "REELS_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "REELS_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter directives
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_filter: String,
}

use std::path::PathBuf;

use clap::Parser;

/// Parley voice/chat gateway
#[derive(Debug, Parser)]
#[command(name = "parley", about = "HTTP gateway for Groq chat completion and transcription")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "parley.toml", env = "PARLEY_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "PARLEY_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "weather-proxy", about = "Weather lookup proxy.")]
pub struct Cli {
    /// Base URL of the weather backend, defaults to WEATHER_BACKEND_URL or http://localhost:8080
    #[arg(long, global = true)]
    pub backend_url: Option<String>,
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the weather endpoint over HTTP.
    Http {
        #[arg(env = "WEATHER_SERVER_ADDRESS", default_value = "127.0.0.1:3000")]
        address: std::net::SocketAddr,
        /// Directory holding the built client, served on every other GET
        #[arg(long, env = "WEATHER_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
    /// Look up one city and print the envelope.
    Lookup { city: String },
}

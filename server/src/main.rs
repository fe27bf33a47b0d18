use clap::Parser;
use cli::{Cli, Command};
use config::ProxyConfig;
use weather::Upstream;

mod cli;
mod config;
mod server;
mod weather;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();

    let config = match args.backend_url {
        Some(url) => ProxyConfig::new(url),
        None => ProxyConfig::from_env()?,
    };
    log::info!("Using weather backend {}", config.backend_url);
    let upstream = Upstream::new(&config);

    match args.cmd {
        Command::Http {
            address,
            static_dir,
        } => server::run(address, upstream, static_dir).await,
        Command::Lookup { city } => {
            let (_, envelope) = weather::lookup(&upstream, &city).await;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            if !envelope.success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

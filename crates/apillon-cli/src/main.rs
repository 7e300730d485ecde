//! Apillon CLI

use apillon_cli::{run, Command, Overrides, Settings};
use apillon_client::ApillonClient;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "apillon")]
#[command(about = "Command line client for the Apillon platform")]
#[command(version)]
struct Args {
    /// Settings file
    #[arg(short, long, default_value = "apillon.toml", env = "APILLON_CONFIG")]
    config: PathBuf,

    /// API key
    #[arg(long, env = "APILLON_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API base URL
    #[arg(long, env = "APILLON_API_URL")]
    endpoint: Option<String>,

    /// Enable debug logging
    #[arg(short, long, env = "APILLON_DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    let log_level = if args.debug { "debug" } else { "info" };
    let default_filter = format!("apillon_cli={0},apillon_client={0}", log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let overrides = Overrides {
        api_key: args.api_key,
        endpoint: args.endpoint,
    };
    let settings = Settings::load(&args.config, &overrides)?;
    let config = settings.client_config();
    tracing::debug!(?config, "Loaded settings");

    let client = ApillonClient::new(config)?;
    run(&client, args.command).await
}

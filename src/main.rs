mod binance;
mod config;
mod error;
mod run;
mod validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::validate::{Transport, validate_limit, validate_symbol};

#[derive(Parser)]
#[command(name = "binance-depth", about = "Order-book depth client for Binance", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Poll the REST depth endpoint every 5 seconds
    Rest(DepthArgs),
    /// Subscribe to the websocket depth stream
    Ws(DepthArgs),
}

#[derive(Args)]
struct DepthArgs {
    /// Path to .env config file
    #[arg(short, long, default_value = ".env")]
    config: PathBuf,

    /// Symbol, e.g. "LTCBTC"
    #[arg(short, long, default_value = "")]
    symbol: String,

    /// Depth levels per side; empty means 10
    #[arg(short, long, default_value = "")]
    limit: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Install default crypto provider for rustls before any TLS connections
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();

    match cli.command {
        Command::Rest(args) => {
            let (config, limit) = prepare(&args, Transport::Rest)?;
            run::run_rest(&config, &args.symbol, &limit).await
        }
        Command::Ws(args) => {
            let (config, limit) = prepare(&args, Transport::Stream)?;
            run::run_stream(&config, &args.symbol, &limit).await
        }
    }
}

/// Validation happens before the config load so bad input never reaches
/// the network.
fn prepare(args: &DepthArgs, transport: Transport) -> Result<(Config, String)> {
    let limit = validate_limit(&args.limit, transport)?;
    validate_symbol(&args.symbol)?;

    Ok((Config::load(&args.config), limit))
}

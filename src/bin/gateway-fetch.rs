use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use radix_gateway_fetch::{
    model::{IntentHash, Network, StateVersion},
    rest::GatewayApiHttpClient,
    utils::{
        conf::Conf,
        logger::{setup_tracing, LogMe, TracingMode},
    },
};
use reqwest::Response;
use tracing::info;

/// A cli to query the Radix Gateway API
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Commands,

    /// RON configuration file, skipped when missing
    #[arg(long)]
    pub config_file: Option<String>,

    /// Base url of the gateway, overrides the configured network
    #[arg(long)]
    pub gateway_url: Option<String>,

    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json_logs: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Committed details of a transaction
    #[command(alias = "d")]
    Details { intent_hash: String },
    /// Successful transactions starting at a state version
    #[command(alias = "s")]
    Stream { state_version: u64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Conf::new(
        args.config_file,
        args.gateway_url,
        args.json_logs.then(|| "json".to_string()),
    )
    .context("reading config file")?;

    setup_tracing(TracingMode::from_log_format(&config.log_format))?;

    let response = match args.command {
        Commands::Details { intent_hash } => {
            let client = GatewayApiHttpClient::new(details_gateway_url(&config, &intent_hash))?;
            info!("Fetching committed details of {} from {}", intent_hash, client.url);
            client
                .get_transaction_details(&IntentHash(intent_hash))
                .await
                .log_error("Fetching transaction details")?
        }
        Commands::Stream { state_version } => {
            let client = GatewayApiHttpClient::new(config.gateway_url())?;
            info!("Fetching transaction stream at {} from {}", state_version, client.url);
            client
                .get_transaction_stream(StateVersion(state_version))
                .await
                .log_error("Fetching transaction stream")?
        }
    };

    print_response(response).await
}

/// Stokenet intent hashes go to the stokenet gateway unless a url was given explicitly.
fn details_gateway_url<'a>(config: &'a Conf, intent_hash: &str) -> &'a str {
    match (&config.gateway_url, Network::from_identifier(intent_hash)) {
        (None, Network::Stokenet) => Network::Stokenet.gateway_url(),
        _ => config.gateway_url(),
    }
}

async fn print_response(response: Response) -> Result<()> {
    info!("Received response {}", response.status());
    let body = response.bytes().await.context("reading response body")?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&body)?;
    stdout.flush()?;
    Ok(())
}

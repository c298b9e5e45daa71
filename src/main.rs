mod cli;
mod config;
mod deepl;
mod error;
mod logging;
mod lokalise;
mod orchestrator;
mod selector;
mod sync;
mod ui;
mod updater;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use cli::{Cli, Command};
use config::LocsyncConfig;
use error::ConfigError;
use deepl::DeepLClient;
use lokalise::{LokaliseClient, PROJECT_ID};
use orchestrator::SyncOrchestrator;
use ui::Summary;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = LocsyncConfig::load(&cli.config);
    let log_config = config
        .as_ref()
        .map(|c| c.log.clone())
        .unwrap_or_default();
    if let Err(e) = logging::init(&log_config, cli.verbose) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    let orchestrator = match config.map_err(anyhow::Error::from).and_then(|c| connect(&c)) {
        Ok(orchestrator) => orchestrator,
        Err(e) if e.is::<ConfigError>() => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("An unexpected error occurred: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    run(&cli, &orchestrator).await;
    ExitCode::SUCCESS
}

/// Validate credentials and build both API clients. Nothing touches the
/// network until this has succeeded.
fn connect(config: &LocsyncConfig) -> Result<SyncOrchestrator<LokaliseClient, DeepLClient>> {
    let credentials = config.credentials()?;
    let store = LokaliseClient::new(
        credentials.lokalise_api_token,
        PROJECT_ID,
        config.request_timeout(),
    )
    .context("failed to build Lokalise client")?;
    let translator = DeepLClient::new(credentials.deepl_auth_key, config.request_timeout())
        .context("failed to build DeepL client")?;
    debug!(project = PROJECT_ID, deepl = translator.base_url(), "clients ready");

    Ok(SyncOrchestrator::new(store, translator))
}

async fn run(cli: &Cli, orchestrator: &SyncOrchestrator<LokaliseClient, DeepLClient>) {
    let summary = Summary::default();
    match cli.command {
        Command::Sync => {
            let report = orchestrator.run().await;
            summary.print_report(&report, cli.json);
        }
        Command::Pending => {
            let items = orchestrator.pending().await;
            summary.print_pending(&items, cli.json);
        }
    }
}

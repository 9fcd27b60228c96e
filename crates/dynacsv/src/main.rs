mod config;
mod export;
mod storage;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{AwsConfig, ExportConfig},
    export::{run_export, ExportSummary},
    storage::DynamoDbSource,
};

/// dynacsv - Export a DynamoDB partition to an append-only CSV file
#[derive(Parser, Debug)]
#[command(name = "dynacsv")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    export: ExportConfig,

    #[command(flatten)]
    aws: AwsConfig,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Export failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExportSummary> {
    tracing::info!(
        endpoint = %cli.aws.target_display(),
        table = %cli.export.table,
        key = %cli.export.key,
        "Starting export"
    );

    let source = DynamoDbSource::from_config(&cli.aws).await;

    run_export(&source, &cli.export).await
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "dynacsv=debug,dynacsv_core=debug"
    } else {
        "dynacsv=info,dynacsv_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

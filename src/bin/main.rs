use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toyprice::cli::Cli;
use toyprice::config::load_environment;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // .env first so both RUST_LOG and clap's env fallbacks see it
    let env_file = load_environment();

    // Initialize tracing; stdout is reserved for the rendered form
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toyprice=info,common=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    env_file.log();

    let cli = Cli::parse();
    cli.run().await
}

use clap::Parser;
use cognipath::{config::Config, Scholar, ScholarError};
use std::process::ExitCode;

mod cli;
mod commands;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(cli.overrides());
    tracing::debug!(model = %config.model, data_dir = %config.data_dir.display(), "configured");
    let app = Scholar::from_config(&config);

    match commands::dispatch(cli.command, &app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("failed to initialize logging: {error}");
    }
}

/// Remote failures get a generic retry hint; the detail goes to the log.
fn report(error: &ScholarError) {
    if error.is_remote() {
        tracing::error!(%error, "request to the model failed");
        eprintln!("Something went wrong while talking to the AI. Please try again.");
    } else {
        eprintln!("error: {error}");
    }
}

mod cli;
mod client;
mod config;
mod dashboard;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ViewArgs};
use client::{FetchOutcome, ReportClient};
use dashboard::Dashboard;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("scandash=debug")
    } else if cli.quiet {
        EnvFilter::new("scandash=error")
    } else {
        EnvFilter::new("scandash=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match &cli.command {
        cli::Commands::View(args) => view(args),
        cli::Commands::Init => config::init_config(),
    }
}

/// Fetch once, render once. No polling, no retries.
fn view(args: &ViewArgs) -> Result<()> {
    let config = config::DashConfig::load(&std::env::current_dir()?);

    let outcome = match &args.file {
        Some(path) => {
            info!("Reading report from {}", path.display());
            client::load_file(path)
        }
        None => {
            let endpoint = args
                .url
                .clone()
                .or_else(|| config.as_ref().and_then(|c| c.fetch.endpoint.clone()))
                .unwrap_or_else(|| client::DEFAULT_ENDPOINT.to_string());
            info!("Fetching report from {endpoint}");
            ReportClient::new(endpoint).fetch()
        }
    };

    let format = args
        .format
        .clone()
        .or_else(|| config.as_ref().and_then(|c| c.output.format.clone()))
        .unwrap_or_else(|| "terminal".to_string());

    match format.as_str() {
        "json" => match outcome {
            FetchOutcome::Report(report) => {
                println!("{}", serde_json::to_string_pretty(report.raw())?);
            }
            FetchOutcome::Unavailable => {
                eprintln!("{}", client::NO_REPORT_MESSAGE);
                std::process::exit(1);
            }
        },
        _ => {
            let mut dashboard = Dashboard::with_terminal_chart();
            match outcome {
                FetchOutcome::Report(report) => dashboard.render(&report),
                FetchOutcome::Unavailable => dashboard.mark_unavailable(),
            }
            dashboard::terminal::render(&dashboard);
        }
    }

    Ok(())
}

pub mod commands;

use clap::Parser;

pub use commands::{Commands, ViewArgs};

/// scandash — terminal dashboard for saved scan reports
///
/// Fetches a previously produced scan report from the local report endpoint
/// and renders it. It is a passive view: it never scans anything itself.
#[derive(Parser, Debug)]
#[command(
    name = "scandash",
    version,
    about = "📊 scandash — terminal dashboard for saved scan reports",
    long_about = "scandash fetches a previously saved scan report from the local report\nendpoint and renders five panels: summary, banners, CVE hints, an\nopen-ports chart and the raw JSON.\n\nA passive view over data produced elsewhere — no scanning, no writes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

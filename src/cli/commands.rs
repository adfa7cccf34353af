use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the saved scan report and render the dashboard
    View(ViewArgs),

    /// Initialize a .scandash.toml config file in the current directory
    Init,
}

#[derive(clap::Args, Debug)]
pub struct ViewArgs {
    /// Report endpoint URL (default: http://127.0.0.1:5000/api/report)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Read a saved report.json from disk instead of fetching
    #[arg(short, long, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Output format: "terminal" or "json"
    #[arg(long)]
    pub format: Option<String>,
}

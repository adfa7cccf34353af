use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// scandash configuration (loaded from .scandash.toml)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DashConfig {
    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FetchConfig {
    /// Report endpoint URL
    #[serde(default)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format: "terminal" or "json"
    #[serde(default)]
    pub format: Option<String>,
}

impl DashConfig {
    /// Try to load .scandash.toml from the given directory or its parents
    pub fn load(start: &Path) -> Option<Self> {
        let config_path = find_config_file(start)?;
        debug!("Found config: {}", config_path.display());

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<DashConfig>(&content) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                    None
                }
            },
            Err(e) => {
                debug!("Could not read {}: {}", config_path.display(), e);
                None
            }
        }
    }
}

/// Walk up from the start path to find .scandash.toml
fn find_config_file(start: &Path) -> Option<std::path::PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(".scandash.toml");
        if config.exists() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Create a default .scandash.toml in the current directory
pub fn init_config() -> Result<()> {
    let config_path = std::env::current_dir()?.join(".scandash.toml");

    if config_path.exists() {
        println!("⚠️  .scandash.toml already exists in this directory");
        return Ok(());
    }

    let default_config = r#"# scandash configuration

[fetch]
# Where the scanner webapp serves the saved report.
# endpoint = "http://127.0.0.1:5000/api/report"

[output]
# Default output format: "terminal" or "json"
format = "terminal"
"#;

    std::fs::write(&config_path, default_config)?;
    println!("✅ Created .scandash.toml");
    println!("   Edit it to point at your report endpoint.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let config: DashConfig = toml::from_str(
            r#"
            [fetch]
            endpoint = "http://127.0.0.1:5000/api/report"

            [output]
            format = "json"
            "#,
        )
        .expect("valid config");

        assert_eq!(
            config.fetch.endpoint.as_deref(),
            Some("http://127.0.0.1:5000/api/report")
        );
        assert_eq!(config.output.format.as_deref(), Some("json"));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: DashConfig = toml::from_str("").expect("valid config");
        assert!(config.fetch.endpoint.is_none());
        assert!(config.output.format.is_none());
    }
}

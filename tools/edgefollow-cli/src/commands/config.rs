//! Show or write the effective configuration.

use std::path::PathBuf;

use edgefollow_common::config::{config_file_path, AppConfig};

pub fn run(config: &AppConfig, path: Option<PathBuf>, write: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(config_file_path);

    println!("{}", serde_json::to_string_pretty(config)?);

    if write {
        config
            .save_to(&path)
            .map_err(|e| anyhow::anyhow!("Failed to write config to {}: {e}", path.display()))?;
        println!("Configuration written to: {}", path.display());
    }

    Ok(())
}

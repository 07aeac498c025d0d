//! JSON run configuration shared by every subcommand.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use dml_stats::config::{PreviewConfig, ReaderConfig, SamplingConfig};

/// Options read from the optional `--config` file; CLI flags override them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub reader: ReaderConfig,
    pub preview: PreviewConfig,
    pub sampling: SamplingConfig,
}

/// Load a run configuration from a JSON file.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RunConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

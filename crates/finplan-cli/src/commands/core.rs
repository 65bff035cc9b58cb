//! Shared command utilities

use std::path::Path;

use anyhow::{Context, Result};
use finplan_core::{OutputFormat, PlannerConfig};

/// Load planner config from `--config`, the default override path, or the
/// embedded defaults
pub fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        Some(path) => PlannerConfig::load_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => PlannerConfig::load().context("Failed to load planner config"),
    }
}

/// Parse the `--format` argument
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    format.parse().map_err(|e: String| anyhow::anyhow!(e))
}

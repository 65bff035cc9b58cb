//! Config inspection commands

use std::path::Path;

use anyhow::{Context, Result};
use finplan_core::default_config_path;

use super::load_config;

pub fn cmd_config_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let toml = config.to_toml().context("Failed to serialize config")?;
    print!("{}", toml);
    Ok(())
}

pub fn cmd_config_path(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()
            .context("Could not determine the platform data directory")?,
    };

    println!("{}", path.display());
    if path.exists() {
        println!("   ✅ Override file present");
    } else {
        println!("   ℹ️  No override file, using built-in defaults");
    }
    Ok(())
}

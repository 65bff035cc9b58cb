//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use finplan_core::PlannerConfig;

pub async fn cmd_serve(
    planner_config: PlannerConfig,
    host: &str,
    port: u16,
    static_dir: Option<&Path>,
) -> Result<()> {
    println!("🚀 Starting finplan web server...");
    println!("   Listening: http://{}:{}", host, port);
    if let Some(dir) = static_dir {
        println!("   Static files: {}", dir.display());
    }

    // Parse allowed CORS origins from environment (comma-separated)
    let allowed_origins = finplan_server::parse_origins(
        &std::env::var("FINPLAN_ALLOWED_ORIGINS").unwrap_or_default(),
    );
    if !allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {} (FINPLAN_ALLOWED_ORIGINS)",
            allowed_origins.join(", ")
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = finplan_server::ServerConfig { allowed_origins };

    let static_dir_str = static_dir
        .map(|p| p.to_str().context("static_dir path must be valid UTF-8"))
        .transpose()?;
    finplan_server::serve_with_config(planner_config, host, port, static_dir_str, config).await?;

    Ok(())
}

//! Plan command implementation

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use finplan_core::{OutputFormat, PlanReport, PlanRequest, Planner, PlannerConfig};
use tracing::{debug, warn};

/// Compute a plan and write it to `output` (or stdout).
///
/// Returns the report so callers can inspect the outcome. Rejected inputs
/// still render (as an error report) and are not a command failure.
pub fn cmd_plan(
    config: PlannerConfig,
    request: &PlanRequest,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<PlanReport> {
    let planner = Planner::with_config(config);
    let report = planner.compute(request);
    debug!(status = report.status(), %format, "Plan computed");

    if let Some(kind) = report.error_kind() {
        warn!(%kind, "Plan could not be produced");
    }

    let rendered = format
        .renderer()
        .render(&report)
        .context("Failed to render plan")?;

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            file.write_all(rendered.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            println!("✅ Plan written to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            if !rendered.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }

    Ok(report)
}

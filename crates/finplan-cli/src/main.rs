//! finplan CLI - Financial goal planner
//!
//! Usage:
//!   finplan plan --income 5000 --expenses 3000 --savings 1000 \
//!                --goal-amount 10000 --goal-years 2
//!   finplan config show       Print the effective planner config
//!   finplan serve --port 7860 Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use finplan_core::PlanRequest;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Plan {
            income,
            expenses,
            savings,
            debt,
            goal_amount,
            goal_years,
            format,
            output,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            let format = commands::parse_format(&format)?;
            let request = PlanRequest::new(income, expenses, savings, debt, goal_amount, goal_years);
            commands::cmd_plan(config, &request, format, output.as_deref()).map(|_| ())
        }
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::cmd_config_show(cli.config.as_deref()),
            Some(ConfigAction::Path) => commands::cmd_config_path(cli.config.as_deref()),
        },
        Commands::Serve {
            port,
            host,
            static_dir,
        } => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::cmd_serve(config, &host, port, static_dir.as_deref()).await
        }
    }
}

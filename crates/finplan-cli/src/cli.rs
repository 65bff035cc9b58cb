//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// finplan - Turn income, expenses and a savings goal into a plan
#[derive(Parser)]
#[command(name = "finplan")]
#[command(about = "Financial goal planner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Planner config file (defaults to ~/.local/share/finplan/config/planner.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute a financial plan
    ///
    /// Zero savings and zero debt are accepted by default. Set
    /// `validation.require_positive_balances = true` in the config to
    /// require all six inputs to be strictly positive.
    Plan {
        /// Monthly income ($)
        #[arg(long, allow_negative_numbers = true)]
        income: f64,

        /// Monthly expenses ($)
        #[arg(long, allow_negative_numbers = true)]
        expenses: f64,

        /// Current savings ($, zero allowed unless strict balances are configured)
        #[arg(long, allow_negative_numbers = true)]
        savings: f64,

        /// Total debt ($, zero allowed unless strict balances are configured)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        debt: f64,

        /// Financial goal amount ($)
        #[arg(long, allow_negative_numbers = true)]
        goal_amount: f64,

        /// Time to reach goal (years)
        #[arg(long, allow_negative_numbers = true)]
        goal_years: f64,

        /// Output format: text, html, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect planner configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "7860")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the override file location
    Path,
}

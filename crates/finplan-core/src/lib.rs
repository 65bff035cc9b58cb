//! finplan Core Library
//!
//! Shared functionality for the finplan financial goal planner:
//! - Plan calculator (validation, savings targets, shortfall/surplus analysis)
//! - Debt management and investment guidance
//! - General financial-education tips
//! - Report renderers (plain text, HTML, JSON)
//! - Planner configuration with embedded defaults and override files

pub mod config;
pub mod error;
pub mod models;
pub mod money;
pub mod planner;
pub mod render;
pub mod tips;

pub use config::{default_config_path, PlannerConfig};
pub use error::{Error, Result};
pub use models::{
    DebtPlan, InvestmentOption, PlanDetails, PlanErrorKind, PlanReport, PlanRequest, Tip,
};
pub use planner::{compute_plan, Planner};
pub use render::{
    render, HtmlRenderer, JsonRenderer, OutputFormat, ReportRenderer, TextRenderer,
};

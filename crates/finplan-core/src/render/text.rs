//! Plain-text renderer for terminals

use std::fmt::{self, Write};

use crate::error::Result;
use crate::models::{PlanDetails, PlanReport, Tip};
use crate::money::{format_currency, format_years};

use super::ReportRenderer;

const RULE: &str = "   ─────────────────────────────────────────────────────────────";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &PlanReport) -> Result<String> {
        let mut out = String::new();
        write_report(&mut out, report)?;
        Ok(out)
    }

    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }
}

fn write_report(out: &mut String, report: &PlanReport) -> fmt::Result {
    match report {
        PlanReport::Error { message, .. } => writeln!(out, "Error: {}", message),
        PlanReport::GoalReached { message, tips } => {
            write_header(out)?;
            writeln!(out, "   {}", message)?;
            write_tips(out, tips)
        }
        PlanReport::Shortfall { shortfall, plan } => {
            write_header(out)?;
            write_figures(out, plan)?;
            writeln!(
                out,
                "   Shortfall:          {}/month",
                format_currency(*shortfall)
            )?;
            writeln!(out)?;
            writeln!(
                out,
                "   Your disposable income is not enough. You're short by {}/month.",
                format_currency(*shortfall)
            )?;
            write_plan_body(out, plan)
        }
        PlanReport::Surplus { surplus, plan } => {
            write_header(out)?;
            write_figures(out, plan)?;
            writeln!(
                out,
                "   Surplus:            {}/month",
                format_currency(*surplus)
            )?;
            writeln!(out)?;
            writeln!(
                out,
                "   Good news: you can cover your goal with {}/month left over.",
                format_currency(*surplus)
            )?;
            write_plan_body(out, plan)
        }
    }
}

fn write_header(out: &mut String) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "📈 Your Financial Plan")?;
    writeln!(out, "{}", RULE)
}

fn write_figures(out: &mut String, plan: &PlanDetails) -> fmt::Result {
    writeln!(
        out,
        "   Goal:               {} in {} years",
        format_currency(plan.goal_amount),
        format_years(plan.goal_years)
    )?;
    writeln!(
        out,
        "   Disposable income:  {}/month",
        format_currency(plan.monthly_disposable)
    )?;
    writeln!(
        out,
        "   Required savings:   {}/month ({}/year)",
        format_currency(plan.monthly_required),
        format_currency(plan.yearly_required)
    )
}

fn write_plan_body(out: &mut String, plan: &PlanDetails) -> fmt::Result {
    write_section(out, "Recommendations", plan.recommendations.iter().cloned())?;

    write_section(
        out,
        "Investment Options",
        plan.investment_options
            .iter()
            .map(|o| format!("{}: {}", o.name, o.description)),
    )?;

    if let Some(debt) = &plan.debt {
        write_section(
            out,
            &format!(
                "Debt Management ({} total)",
                format_currency(debt.total_debt)
            ),
            debt.actions.iter().cloned(),
        )?;
    }

    write_tips(out, &plan.tips)
}

fn write_tips(out: &mut String, tips: &[Tip]) -> fmt::Result {
    write_section(
        out,
        "Financial Education Tips",
        tips.iter().map(|t| format!("{}: {}", t.topic, t.text)),
    )
}

fn write_section(
    out: &mut String,
    title: &str,
    items: impl Iterator<Item = String>,
) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "   {}", title)?;
    for item in items {
        writeln!(out, "   • {}", item)?;
    }
    Ok(())
}

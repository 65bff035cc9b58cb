//! HTML markup renderer (dark card layout)

use std::fmt::{self, Write};

use crate::error::Result;
use crate::models::{PlanDetails, PlanReport, Tip};
use crate::money::{format_currency, format_years};

use super::ReportRenderer;

const CARD_STYLE: &str =
    "background-color: #2a2a3b; padding: 20px; border-radius: 8px; color: #e0e0e0;";
const TIPS_STYLE: &str =
    "background-color: #1b3a4b; padding: 15px; border-left: 4px solid #4a90e2; margin-top: 20px;";
const ERROR_STYLE: &str = "color: #e74c3c;";
const HEADING_STYLE: &str = "color: #ffffff;";

/// Renders a report as an HTML fragment
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl ReportRenderer for HtmlRenderer {
    fn render(&self, report: &PlanReport) -> Result<String> {
        let mut out = String::new();
        write_report(&mut out, report)?;
        Ok(out)
    }

    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

fn write_report(out: &mut String, report: &PlanReport) -> fmt::Result {
    match report {
        PlanReport::Error { message, .. } => write!(
            out,
            "<p style='{}'><strong>Error:</strong> {}</p>",
            ERROR_STYLE,
            escape(message)
        ),
        PlanReport::GoalReached { message, tips } => {
            open_card(out)?;
            writeln!(out, "<p>{}</p>", escape(message))?;
            write_tips(out, tips)?;
            writeln!(out, "</div>")
        }
        PlanReport::Shortfall { shortfall, plan } => {
            open_card(out)?;
            write_goal_analysis(out, plan)?;
            writeln!(
                out,
                "<p><strong>Issue:</strong> Your disposable income ({}/month) is not enough. You're short by {}/month.</p>",
                format_currency(plan.monthly_disposable),
                format_currency(*shortfall)
            )?;
            write_plan_body(out, plan)?;
            writeln!(out, "</div>")
        }
        PlanReport::Surplus { surplus, plan } => {
            open_card(out)?;
            write_goal_analysis(out, plan)?;
            writeln!(
                out,
                "<p><strong>Good News:</strong> You have {} available each month, leaving a surplus of {}.</p>",
                format_currency(plan.monthly_disposable),
                format_currency(*surplus)
            )?;
            write_plan_body(out, plan)?;
            writeln!(out, "</div>")
        }
    }
}

fn open_card(out: &mut String) -> fmt::Result {
    writeln!(out, "<div style='{}'>", CARD_STYLE)?;
    writeln!(
        out,
        "<h2 style='{}'>Your Financial Plan</h2>",
        HEADING_STYLE
    )
}

fn write_goal_analysis(out: &mut String, plan: &PlanDetails) -> fmt::Result {
    writeln!(
        out,
        "<p><strong>Goal Analysis:</strong> To reach {} in {} years, you need to save {} per month.</p>",
        format_currency(plan.goal_amount),
        format_years(plan.goal_years),
        format_currency(plan.monthly_required)
    )
}

fn write_plan_body(out: &mut String, plan: &PlanDetails) -> fmt::Result {
    writeln!(out, "<p><strong>Recommendation:</strong></p>")?;
    write_list(out, plan.recommendations.iter().map(|r| escape(r)))?;

    writeln!(out, "<p><strong>Investment Options:</strong></p>")?;
    write_list(
        out,
        plan.investment_options.iter().map(|o| {
            format!(
                "<strong>{}:</strong> {}",
                escape(&o.name),
                escape(&o.description)
            )
        }),
    )?;

    if let Some(debt) = &plan.debt {
        writeln!(
            out,
            "<p><strong>Debt Management:</strong> You have {} in debt.</p>",
            format_currency(debt.total_debt)
        )?;
        write_list(out, debt.actions.iter().map(|a| escape(a)))?;
    }

    writeln!(out, "<div style='{}'>", TIPS_STYLE)?;
    write_tips(out, &plan.tips)?;
    writeln!(out, "</div>")
}

fn write_tips(out: &mut String, tips: &[Tip]) -> fmt::Result {
    writeln!(out, "<h3>Financial Education Tips</h3>")?;
    write_list(
        out,
        tips.iter()
            .map(|t| format!("<strong>{}:</strong> {}", escape(&t.topic), escape(&t.text))),
    )
}

fn write_list(out: &mut String, items: impl Iterator<Item = String>) -> fmt::Result {
    writeln!(out, "<ul>")?;
    for item in items {
        writeln!(out, "    <li>{}</li>", item)?;
    }
    writeln!(out, "</ul>")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

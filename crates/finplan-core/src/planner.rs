//! Plan calculator
//!
//! Turns the six inputs of a [`PlanRequest`] into a [`PlanReport`]:
//!
//! 1. Validate (non-positive inputs, then expenses over income)
//! 2. Compare savings to the goal ("already reached" short-circuits)
//! 3. Derive monthly/yearly savings targets and pick the shortfall or
//!    surplus branch
//! 4. Attach investment options, the debt block and general tips
//!
//! [`Planner::plan`] propagates typed errors. [`Planner::compute`] is the
//! boundary that folds every error into [`PlanReport::Error`].

use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::error::{Error, Result};
use crate::models::{
    DebtPlan, InvestmentOption, PlanDetails, PlanReport, PlanRequest, GOAL_REACHED_MESSAGE,
};
use crate::money::format_currency;
use crate::tips::general_tips;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Financial plan calculator
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Create a planner with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Compute a plan, converting any failure into an error report
    pub fn compute(&self, request: &PlanRequest) -> PlanReport {
        match self.plan(request) {
            Ok(report) => report,
            Err(e) => {
                match e {
                    Error::NonPositiveInput | Error::ExpensesExceedIncome => {
                        warn!(error = %e, "Plan request rejected")
                    }
                    _ => warn!(error = %e, ?request, "Plan computation failed"),
                }
                PlanReport::from_error(&e)
            }
        }
    }

    /// Compute a plan, propagating validation and computation errors
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanReport> {
        self.validate(request)?;
        ensure_finite_inputs(request)?;

        let disposable = finite("monthly disposable income", request.monthly_disposable())?;
        let needed = finite("amount needed", request.goal_amount - request.savings)?;

        if needed <= 0.0 {
            debug!(needed, "Savings already cover the goal");
            return Ok(PlanReport::GoalReached {
                message: GOAL_REACHED_MESSAGE.to_string(),
                tips: general_tips(0.0, request.debt),
            });
        }

        let months = finite("goal months", request.goal_years * MONTHS_PER_YEAR)?;
        if months == 0.0 {
            return Err(Error::Computation(
                "goal timeline resolves to zero months".to_string(),
            ));
        }

        let monthly_required = finite("monthly savings required", needed / months)?;
        let yearly_required = finite(
            "yearly savings required",
            monthly_required * MONTHS_PER_YEAR,
        )?;

        let investment_options = self.investment_options(request.expenses)?;
        let debt = self.debt_plan(request.debt, months, disposable)?;
        let tips = general_tips(monthly_required, request.debt);

        let mut details = PlanDetails {
            goal_amount: request.goal_amount,
            goal_years: request.goal_years,
            monthly_disposable: disposable,
            monthly_required,
            yearly_required,
            recommendations: Vec::new(),
            investment_options,
            debt,
            tips,
        };

        if monthly_required > disposable {
            let shortfall = monthly_required - disposable;
            debug!(monthly_required, disposable, shortfall, "Shortfall plan");
            details.recommendations = shortfall_recommendations(shortfall);
            Ok(PlanReport::Shortfall {
                shortfall,
                plan: details,
            })
        } else {
            let surplus = disposable - monthly_required;
            debug!(monthly_required, disposable, surplus, "Surplus plan");
            details.recommendations = surplus_recommendations(monthly_required, surplus);
            Ok(PlanReport::Surplus {
                surplus,
                plan: details,
            })
        }
    }

    fn validate(&self, request: &PlanRequest) -> Result<()> {
        let required = [
            request.income,
            request.expenses,
            request.goal_amount,
            request.goal_years,
        ];
        if required.iter().any(|&v| v <= 0.0) {
            return Err(Error::NonPositiveInput);
        }

        let balances = [request.savings, request.debt];
        let balance_rejected = if self.config.require_positive_balances {
            balances.iter().any(|&v| v <= 0.0)
        } else {
            balances.iter().any(|&v| v < 0.0)
        };
        if balance_rejected {
            return Err(Error::NonPositiveInput);
        }

        if request.monthly_disposable() < 0.0 {
            return Err(Error::ExpensesExceedIncome);
        }

        Ok(())
    }

    fn investment_options(&self, expenses: f64) -> Result<Vec<InvestmentOption>> {
        let min_months = self.config.emergency_fund_min_months;
        let max_months = self.config.emergency_fund_max_months;
        let low = finite("emergency fund minimum", expenses * f64::from(min_months))?;
        let high = finite("emergency fund maximum", expenses * f64::from(max_months))?;

        Ok(vec![
            InvestmentOption::new(
                "High-Yield Savings Account",
                "Safe, earns 3-5% annually. Good for short-term goals.",
            ),
            InvestmentOption::new(
                "Mutual Funds",
                "Diversified, moderate risk, 6-8% average returns. Suitable for 5+ years.",
            ),
            InvestmentOption::new(
                "Emergency Fund",
                format!(
                    "Save {}-{} months of expenses ({}-{}) before investing.",
                    min_months,
                    max_months,
                    format_currency(low),
                    format_currency(high)
                ),
            ),
        ])
    }

    fn debt_plan(&self, debt: f64, months: f64, disposable: f64) -> Result<Option<DebtPlan>> {
        if debt <= 0.0 {
            return Ok(None);
        }

        let payoff = debt / months;
        let cap = disposable * self.config.debt_payment_cap_ratio;
        let monthly_payment = finite("monthly debt payment", payoff.min(cap))?;
        debug!(debt, payoff, cap, monthly_payment, "Debt payment");

        Ok(Some(DebtPlan {
            total_debt: debt,
            monthly_payment,
            actions: vec![
                format!(
                    "Pay at least {}/month toward debt to reduce it steadily.",
                    format_currency(monthly_payment)
                ),
                "Prioritize high-interest debt (e.g., credit cards) to save on interest."
                    .to_string(),
                "Avoid new debt to focus on your goal.".to_string(),
            ],
        }))
    }
}

/// Compute a plan with the default configuration
pub fn compute_plan(
    income: f64,
    expenses: f64,
    savings: f64,
    debt: f64,
    goal_amount: f64,
    goal_years: f64,
) -> PlanReport {
    Planner::new().compute(&PlanRequest::new(
        income,
        expenses,
        savings,
        debt,
        goal_amount,
        goal_years,
    ))
}

fn shortfall_recommendations(shortfall: f64) -> Vec<String> {
    vec![
        format!(
            "Reduce monthly expenses by at least {}. Consider cutting non-essential spending (e.g., dining out, subscriptions).",
            format_currency(shortfall)
        ),
        "Increase income through side hustles or a raise to cover the shortfall.".to_string(),
        "Extend your goal timeline to reduce the monthly savings needed.".to_string(),
    ]
}

fn surplus_recommendations(monthly_required: f64, surplus: f64) -> Vec<String> {
    vec![
        format!(
            "Save {} each month to meet your goal.",
            format_currency(monthly_required)
        ),
        format!(
            "Consider investing the surplus ({}/month) to grow your wealth faster.",
            format_currency(surplus)
        ),
        "Automate savings to stay consistent.".to_string(),
    ]
}

/// Reject NaN and infinite inputs that got past the positivity checks
fn ensure_finite_inputs(request: &PlanRequest) -> Result<()> {
    let fields = [
        ("income", request.income),
        ("expenses", request.expenses),
        ("savings", request.savings),
        ("debt", request.debt),
        ("goal amount", request.goal_amount),
        ("goal years", request.goal_years),
    ];
    for (what, value) in fields {
        finite(what, value)?;
    }
    Ok(())
}

/// Reject NaN and infinite intermediates
fn finite(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Computation(format!("{} is not finite ({})", what, value)))
    }
}

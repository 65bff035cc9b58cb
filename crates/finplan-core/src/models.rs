//! Domain models for finplan

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Message shown when a computation fails unexpectedly
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Message shown when current savings already cover the goal
pub const GOAL_REACHED_MESSAGE: &str =
    "You've already reached or exceeded your goal! Consider setting a new goal or investing your savings.";

/// The six inputs of a plan. Monetary values are monthly except `savings`,
/// `debt` and `goal_amount`, which are totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Monthly income
    pub income: f64,
    /// Monthly expenses
    pub expenses: f64,
    /// Current savings
    pub savings: f64,
    /// Total outstanding debt
    pub debt: f64,
    /// Amount to reach
    #[serde(alias = "goalAmount")]
    pub goal_amount: f64,
    /// Years to reach the goal
    #[serde(alias = "goalYears")]
    pub goal_years: f64,
}

impl PlanRequest {
    pub fn new(
        income: f64,
        expenses: f64,
        savings: f64,
        debt: f64,
        goal_amount: f64,
        goal_years: f64,
    ) -> Self {
        Self {
            income,
            expenses,
            savings,
            debt,
            goal_amount,
            goal_years,
        }
    }

    /// Income left over after expenses each month
    pub fn monthly_disposable(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Kind of failure carried by an error report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanErrorKind {
    /// An input was zero or negative
    NonPositiveInput,
    /// Expenses are larger than income
    ExpensesExceedIncome,
    /// Unexpected arithmetic fault (zero months, non-finite values)
    Computation,
}

impl PlanErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonPositiveInput => "non_positive_input",
            Self::ExpensesExceedIncome => "expenses_exceed_income",
            Self::Computation => "computation",
        }
    }
}

impl std::fmt::Display for PlanErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A general financial-education tip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub topic: String,
    pub text: String,
}

impl Tip {
    pub fn new(topic: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            text: text.into(),
        }
    }
}

/// A suggested place to put savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentOption {
    pub name: String,
    pub description: String,
}

impl InvestmentOption {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Debt management block, present only when the user carries debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPlan {
    pub total_debt: f64,
    /// Suggested monthly payment, capped at a share of disposable income
    pub monthly_payment: f64,
    pub actions: Vec<String>,
}

/// Figures and advice shared by the shortfall and surplus reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDetails {
    pub goal_amount: f64,
    pub goal_years: f64,
    pub monthly_disposable: f64,
    pub monthly_required: f64,
    pub yearly_required: f64,
    pub recommendations: Vec<String>,
    pub investment_options: Vec<InvestmentOption>,
    pub debt: Option<DebtPlan>,
    pub tips: Vec<Tip>,
}

/// Result of a plan computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlanReport {
    /// Inputs were rejected or the computation failed
    Error { kind: PlanErrorKind, message: String },
    /// Savings already cover the goal
    GoalReached { message: String, tips: Vec<Tip> },
    /// Required savings exceed disposable income
    Shortfall { shortfall: f64, plan: PlanDetails },
    /// Disposable income covers required savings
    Surplus { surplus: f64, plan: PlanDetails },
}

impl PlanReport {
    /// Build the error report for a failed computation.
    ///
    /// Validation errors keep their own message. Everything else is reported
    /// with a generic message so internals never reach the user.
    pub fn from_error(err: &Error) -> Self {
        let (kind, message) = match err {
            Error::NonPositiveInput => (PlanErrorKind::NonPositiveInput, err.to_string()),
            Error::ExpensesExceedIncome => {
                (PlanErrorKind::ExpensesExceedIncome, err.to_string())
            }
            _ => (
                PlanErrorKind::Computation,
                GENERIC_ERROR_MESSAGE.to_string(),
            ),
        };
        Self::Error { kind, message }
    }

    /// Tag used in serialized reports
    pub fn status(&self) -> &'static str {
        match self {
            Self::Error { .. } => "error",
            Self::GoalReached { .. } => "goal_reached",
            Self::Shortfall { .. } => "shortfall",
            Self::Surplus { .. } => "surplus",
        }
    }

    pub fn error_kind(&self) -> Option<PlanErrorKind> {
        match self {
            Self::Error { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&PlanDetails> {
        match self {
            Self::Shortfall { plan, .. } | Self::Surplus { plan, .. } => Some(plan),
            _ => None,
        }
    }

    pub fn monthly_required(&self) -> Option<f64> {
        self.details().map(|d| d.monthly_required)
    }

    pub fn shortfall(&self) -> Option<f64> {
        match self {
            Self::Shortfall { shortfall, .. } => Some(*shortfall),
            _ => None,
        }
    }

    pub fn surplus(&self) -> Option<f64> {
        match self {
            Self::Surplus { surplus, .. } => Some(*surplus),
            _ => None,
        }
    }

    /// General tips, present on every non-error report
    pub fn tips(&self) -> &[Tip] {
        match self {
            Self::Error { .. } => &[],
            Self::GoalReached { tips, .. } => tips,
            Self::Shortfall { plan, .. } | Self::Surplus { plan, .. } => &plan.tips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_camel_case_aliases() {
        let json = r#"{"income":5000,"expenses":3000,"savings":1000,"debt":0,"goalAmount":10000,"goalYears":2}"#;
        let request: PlanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.goal_amount, 10000.0);
        assert_eq!(request.goal_years, 2.0);
        assert_eq!(request.monthly_disposable(), 2000.0);
    }

    #[test]
    fn test_report_serializes_with_status_tag() {
        let report = PlanReport::Error {
            kind: PlanErrorKind::ExpensesExceedIncome,
            message: "nope".to_string(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["kind"], "expenses_exceed_income");
        assert_eq!(report.status(), "error");
    }

    #[test]
    fn test_from_error_hides_internal_detail() {
        let report = PlanReport::from_error(&Error::Computation("division by zero".into()));
        match report {
            PlanReport::Error { kind, message } => {
                assert_eq!(kind, PlanErrorKind::Computation);
                assert_eq!(message, GENERIC_ERROR_MESSAGE);
            }
            other => panic!("expected error report, got {:?}", other),
        }
    }

    #[test]
    fn test_from_error_keeps_validation_message() {
        let report = PlanReport::from_error(&Error::NonPositiveInput);
        assert_eq!(report.error_kind(), Some(PlanErrorKind::NonPositiveInput));
        assert!(report.tips().is_empty());
        assert!(report.details().is_none());
    }
}

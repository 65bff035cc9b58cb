//! Integration tests for finplan-core
//!
//! These tests exercise the full request → plan → render workflow through the
//! public API.

use finplan_core::{
    compute_plan, render, OutputFormat, PlanErrorKind, PlanReport, PlanRequest, Planner,
    PlannerConfig,
};

/// Inputs covering every report variant
fn sample_requests() -> Vec<PlanRequest> {
    vec![
        PlanRequest::new(5000.0, 3000.0, 1000.0, 0.0, 10000.0, 2.0),
        PlanRequest::new(2000.0, 1900.0, 0.0, 5000.0, 20000.0, 1.0),
        PlanRequest::new(3000.0, 1000.0, 5000.0, 0.0, 4000.0, 3.0),
        PlanRequest::new(-1.0, 1000.0, 5000.0, 0.0, 4000.0, 3.0),
        PlanRequest::new(1000.0, 3000.0, 5000.0, 0.0, 4000.0, 3.0),
    ]
}

// =============================================================================
// Calculator properties
// =============================================================================

#[test]
fn test_required_savings_formula_holds_across_inputs() {
    let planner = Planner::new();

    for income in [1500.0, 4000.0, 12000.0] {
        for goal_years in [0.5, 1.0, 3.0, 10.0] {
            for savings in [0.0, 2500.0] {
                let request = PlanRequest::new(income, 1200.0, savings, 0.0, 30000.0, goal_years);
                let report = planner.compute(&request);

                let plan = report.details().expect("plan expected");
                let expected = (30000.0 - savings) / (goal_years * 12.0);
                assert_eq!(plan.monthly_required, expected);
                assert_eq!(plan.yearly_required, expected * 12.0);

                let disposable = income - 1200.0;
                assert_eq!(plan.monthly_disposable, disposable);
                if expected > disposable {
                    let shortfall = report.shortfall().expect("shortfall expected");
                    assert!(shortfall > 0.0);
                    assert_eq!(shortfall, expected - disposable);
                } else {
                    let surplus = report.surplus().expect("surplus expected");
                    assert!(surplus >= 0.0);
                    assert_eq!(surplus, disposable - expected);
                }
            }
        }
    }
}

#[test]
fn test_debt_block_iff_debt_positive() {
    for debt in [0.0, 0.01, 900.0, 250000.0] {
        let report = compute_plan(4000.0, 2500.0, 100.0, debt, 9000.0, 2.0);
        let plan = report.details().unwrap();

        match &plan.debt {
            Some(block) => {
                assert!(debt > 0.0);
                let expected = (debt / 24.0).min(1500.0 * 0.3);
                assert_eq!(block.monthly_payment, expected);
            }
            None => assert_eq!(debt, 0.0),
        }
    }
}

#[test]
fn test_savings_at_or_above_goal_is_goal_reached() {
    for savings in [4000.0, 4000.01, 1e6] {
        let report = compute_plan(3000.0, 1000.0, savings, 0.0, 4000.0, 3.0);
        assert!(matches!(report, PlanReport::GoalReached { .. }));
        assert_eq!(report.monthly_required(), None);
    }
}

#[test]
fn test_error_reports_have_no_plan_fields() {
    let report = compute_plan(1000.0, 3000.0, 5000.0, 0.0, 4000.0, 3.0);

    assert_eq!(report.error_kind(), Some(PlanErrorKind::ExpensesExceedIncome));
    assert!(report.details().is_none());
    assert!(report.tips().is_empty());
    assert!(report.shortfall().is_none());
    assert!(report.surplus().is_none());
}

#[test]
fn test_computation_is_deterministic() {
    let planner = Planner::new();
    for request in sample_requests() {
        assert_eq!(planner.compute(&request), planner.compute(&request));
    }
}

#[test]
fn test_planner_shared_across_threads() {
    let planner = std::sync::Arc::new(Planner::new());

    let handles: Vec<_> = (1..=4)
        .map(|years| {
            let planner = planner.clone();
            std::thread::spawn(move || {
                planner.compute(&PlanRequest::new(
                    5000.0,
                    3000.0,
                    0.0,
                    0.0,
                    12000.0,
                    years as f64,
                ))
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let report = handle.join().unwrap();
        let years = (i + 1) as f64;
        assert_eq!(report.monthly_required(), Some(12000.0 / (years * 12.0)));
    }
}

// =============================================================================
// Config + rendering
// =============================================================================

#[test]
fn test_config_from_toml_drives_planner() {
    let config = PlannerConfig::from_toml(
        r#"
[debt]
payment_cap_ratio = 0.1

[emergency_fund]
min_months = 2
max_months = 4
"#,
    )
    .unwrap();

    let report = Planner::with_config(config)
        .compute(&PlanRequest::new(2000.0, 1000.0, 0.0, 12000.0, 24000.0, 2.0));
    let plan = report.details().unwrap();

    // 12000 / 24 = 500, capped at 1000 * 0.1
    assert_eq!(plan.debt.as_ref().unwrap().monthly_payment, 100.0);
    assert_eq!(
        plan.investment_options[2].description,
        "Save 2-4 months of expenses ($2,000.00-$4,000.00) before investing."
    );
}

#[test]
fn test_json_output_round_trips_to_report() {
    for request in sample_requests() {
        let report = Planner::new().compute(&request);
        let json = render(&report, OutputFormat::Json).unwrap();
        let parsed: PlanReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.status(), report.status());
        assert_eq!(parsed.error_kind(), report.error_kind());
        assert_eq!(parsed.tips(), report.tips());
        match (parsed.details(), report.details()) {
            (Some(a), Some(b)) => {
                assert!((a.monthly_required - b.monthly_required).abs() < 1e-9);
                assert_eq!(a.recommendations, b.recommendations);
                assert_eq!(a.debt.is_some(), b.debt.is_some());
            }
            (None, None) => {}
            _ => panic!("plan presence changed for {}", report.status()),
        }
    }
}

#[test]
fn test_html_and_text_agree_on_figures() {
    let report = compute_plan(2000.0, 1900.0, 0.0, 5000.0, 20000.0, 1.0);

    let html = render(&report, OutputFormat::Html).unwrap();
    let text = render(&report, OutputFormat::Text).unwrap();

    for figure in ["$1,666.67", "$1,566.67", "$30.00", "$5,700.00-$11,400.00"] {
        assert!(html.contains(figure), "html missing {}", figure);
        assert!(text.contains(figure), "text missing {}", figure);
    }
}

//! Plan handlers

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{AppError, AppState};
use finplan_core::{OutputFormat, PlanErrorKind, PlanReport, PlanRequest};

/// Query parameters for rendered plans
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    /// Output format (html, text, json). Defaults to html.
    pub format: Option<String>,
}

/// HTTP status for a report. Rejected inputs are 422, computation faults 500.
pub fn report_status(report: &PlanReport) -> StatusCode {
    match report.error_kind() {
        None => StatusCode::OK,
        Some(PlanErrorKind::NonPositiveInput) | Some(PlanErrorKind::ExpensesExceedIncome) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        Some(PlanErrorKind::Computation) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// POST /api/plan - Compute a plan and return the structured report
pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRequest>,
) -> (StatusCode, Json<PlanReport>) {
    let report = state.planner.compute(&request);
    info!(status = report.status(), "Plan computed");
    (report_status(&report), Json(report))
}

/// POST /api/plan/render - Compute a plan and return it rendered
pub async fn render_plan(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RenderQuery>,
    Json(request): Json<PlanRequest>,
) -> Result<Response, AppError> {
    let format: OutputFormat = params
        .format
        .as_deref()
        .unwrap_or("html")
        .parse()
        .map_err(|e: String| AppError::bad_request(&e))?;

    let report = state.planner.compute(&request);
    let renderer = format.renderer();
    let body = renderer.render(&report)?;

    info!(status = report.status(), %format, "Plan rendered");

    Ok((
        report_status(&report),
        [(header::CONTENT_TYPE, renderer.content_type())],
        body,
    )
        .into_response())
}

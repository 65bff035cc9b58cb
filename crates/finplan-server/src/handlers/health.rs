//! Health and configuration handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use finplan_core::PlannerConfig;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/config - Effective planner configuration
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<PlannerConfig> {
    Json(state.planner.config().clone())
}

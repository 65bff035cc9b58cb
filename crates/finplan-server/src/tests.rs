//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(PlannerConfig::default(), None, ServerConfig::default())
}

fn plan_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_body_text(response: axum::response::Response) -> String {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn surplus_body() -> serde_json::Value {
    serde_json::json!({
        "income": 5000,
        "expenses": 3000,
        "savings": 1000,
        "debt": 0,
        "goal_amount": 10000,
        "goal_years": 2
    })
}

// ========== Health / Config ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_get_config() {
    let config = PlannerConfig {
        debt_payment_cap_ratio: 0.4,
        ..Default::default()
    };
    let app = create_router(config, None, ServerConfig::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/config")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["debt_payment_cap_ratio"], 0.4);
    assert_eq!(json["emergency_fund_max_months"], 6);
}

// ========== Plan API ==========

#[tokio::test]
async fn test_create_plan_surplus() {
    let app = setup_test_app();

    let response = app
        .oneshot(plan_request("/api/plan", surplus_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "surplus");
    assert_eq!(json["surplus"], 1625.0);
    assert_eq!(json["plan"]["monthly_required"], 375.0);
    assert_eq!(json["plan"]["yearly_required"], 4500.0);
    assert!(json["plan"]["debt"].is_null());
}

#[tokio::test]
async fn test_create_plan_camel_case_shortfall() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "income": 2000,
        "expenses": 1900,
        "savings": 0,
        "debt": 5000,
        "goalAmount": 20000,
        "goalYears": 1
    });
    let response = app.oneshot(plan_request("/api/plan", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "shortfall");
    let payment = json["plan"]["debt"]["monthly_payment"].as_f64().unwrap();
    assert!((payment - 30.0).abs() < 0.01);
}

#[tokio::test]
async fn test_create_plan_goal_reached() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "income": 3000,
        "expenses": 1000,
        "savings": 5000,
        "debt": 0,
        "goal_amount": 4000,
        "goal_years": 3
    });
    let response = app.oneshot(plan_request("/api/plan", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "goal_reached");
    assert!(json.get("plan").is_none());
}

#[tokio::test]
async fn test_create_plan_validation_error() {
    let app = setup_test_app();

    let mut body = surplus_body();
    body["income"] = serde_json::json!(0);
    let response = app.oneshot(plan_request("/api/plan", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = get_body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["kind"], "non_positive_input");
    assert_eq!(json["message"], "All values must be positive.");
}

#[tokio::test]
async fn test_create_plan_expenses_exceed_income() {
    let app = setup_test_app();

    let mut body = surplus_body();
    body["expenses"] = serde_json::json!(6000);
    let response = app.oneshot(plan_request("/api/plan", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = get_body_json(response).await;
    assert_eq!(json["kind"], "expenses_exceed_income");
}

#[tokio::test]
async fn test_create_plan_computation_fault() {
    let app = setup_test_app();

    let mut body = surplus_body();
    body["goal_amount"] = serde_json::json!(1e300);
    body["goal_years"] = serde_json::json!(1e-320);
    let response = app.oneshot(plan_request("/api/plan", body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = get_body_json(response).await;
    assert_eq!(json["kind"], "computation");
    assert_eq!(json["message"], "An error occurred. Please try again.");
}

#[tokio::test]
async fn test_create_plan_missing_field() {
    let app = setup_test_app();

    let body = serde_json::json!({ "income": 5000 });
    let response = app.oneshot(plan_request("/api/plan", body)).await.unwrap();

    assert!(response.status().is_client_error());
}

// ========== Rendered Plans ==========

#[tokio::test]
async fn test_render_plan_defaults_to_html() {
    let app = setup_test_app();

    let response = app
        .oneshot(plan_request("/api/plan/render", surplus_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );

    let html = get_body_text(response).await;
    assert!(html.contains("Your Financial Plan"));
    assert!(html.contains("leaving a surplus of $1,625.00"));
}

#[tokio::test]
async fn test_render_plan_text() {
    let app = setup_test_app();

    let response = app
        .oneshot(plan_request("/api/plan/render?format=text", surplus_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = get_body_text(response).await;
    assert!(text.contains("Required savings:   $375.00/month"));
}

#[tokio::test]
async fn test_render_plan_error_markup() {
    let app = setup_test_app();

    let mut body = surplus_body();
    body["goal_years"] = serde_json::json!(-1);
    let response = app
        .oneshot(plan_request("/api/plan/render?format=html", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = get_body_text(response).await;
    assert!(html.contains("<strong>Error:</strong> All values must be positive."));
}

#[tokio::test]
async fn test_render_plan_unknown_format() {
    let app = setup_test_app();

    let response = app
        .oneshot(plan_request("/api/plan/render?format=pdf", surplus_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Unknown output format"));
}

// ========== Config helpers ==========

#[test]
fn test_parse_origins() {
    let origins = parse_origins(" https://a.example , ,https://b.example");
    assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
    assert!(parse_origins("").is_empty());
}

#[test]
fn test_report_status_mapping() {
    use finplan_core::{compute_plan, PlanErrorKind, PlanReport};

    assert_eq!(
        handlers::report_status(&compute_plan(5000.0, 3000.0, 1000.0, 0.0, 10000.0, 2.0)),
        StatusCode::OK
    );
    assert_eq!(
        handlers::report_status(&PlanReport::Error {
            kind: PlanErrorKind::Computation,
            message: String::new(),
        }),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

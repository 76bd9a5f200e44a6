use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use yoga_coach::api::routes::create_routes;

fn beginner_preferences(duration_minutes: u32) -> Value {
    json!({
        "user_id": null,
        "level": "beginner",
        "goal": "flexibility",
        "duration": duration_minutes,
        "frequency": 3,
        "discomforts": [],
        "start_date": null,
    })
}

async fn post_json(uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    create_routes().oneshot(request).await.unwrap()
}

async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = create_routes().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn generate_plan_endpoint_returns_a_full_plan() {
    let response = post_json(
        "/api/plans/generate",
        json!({ "preferences": beginner_preferences(30), "stage": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let plan = response_json(response).await;
    assert_eq!(plan["name"], "Flexibility Beginner I");
    assert_eq!(plan["weeks"].as_array().unwrap().len(), 4);
    assert_eq!(plan["total_planned_sessions"], 12);
}

#[tokio::test]
async fn generate_routine_endpoint_returns_a_full_routine() {
    let response = post_json(
        "/api/routines/generate",
        json!({ "preferences": beginner_preferences(15) }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let routine = response_json(response).await;
    assert_eq!(routine["name"], "Flexibility Flow");
    assert_eq!(routine["poses"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn malformed_body_is_rejected_with_error_code() {
    let response = post_json("/api/plans/generate", json!({ "preferences": {} })).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["error_code"], "invalid_body");
}

#[tokio::test]
async fn unsupported_duration_is_rejected() {
    let response = post_json(
        "/api/routines/generate",
        json!({ "preferences": beginner_preferences(20) }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

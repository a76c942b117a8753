use assist_api::{build_app, serve, ApiConfig, MAX_BODY_BYTES};
use assist_core::Category;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(ApiConfig::default())
}

fn recommendation_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/recommendation")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn recommend(app: Router, text: &str) -> Value {
    let response = app
        .oneshot(recommendation_request(
            json!({ "input_text": text }).to_string(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

fn expected(category: Category) -> Value {
    serde_json::to_value(category.response()).unwrap()
}

#[tokio::test]
async fn delayed_flight_returns_delay_guidance() {
    let parsed = recommend(app(), "My flight is delayed, what do I do?").await;
    let response = &parsed["response"];

    assert_eq!(response, &expected(Category::Delay));
    assert!(response["message"]
        .as_str()
        .unwrap()
        .contains("apologize for the flight delay"));
    assert_eq!(
        response["recommendations"][0],
        "Check with gate agent for updated departure time"
    );
}

#[tokio::test]
async fn empty_text_returns_general_guidance() {
    let parsed = recommend(app(), "").await;
    assert_eq!(parsed["response"], expected(Category::General));
}

#[tokio::test]
async fn cancel_takes_precedence_over_weather() {
    let parsed = recommend(app(), "I need to cancel due to weather").await;
    assert_eq!(parsed["response"], expected(Category::Cancellation));
}

#[tokio::test]
async fn uppercase_cancel_is_recognised() {
    let parsed = recommend(app(), "CANCEL MY TICKET").await;
    assert_eq!(parsed["response"], expected(Category::Cancellation));
}

#[tokio::test]
async fn response_envelope_has_only_three_fields() {
    let parsed = recommend(app(), "storm and weather warnings").await;
    let envelope = parsed.as_object().unwrap();
    assert_eq!(envelope.len(), 1);

    let response = parsed["response"].as_object().unwrap();
    let mut keys = response.keys().cloned().collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, vec!["message", "passenger_message", "recommendations"]);
}

#[tokio::test]
async fn missing_input_text_is_unprocessable() {
    let response = app()
        .oneshot(recommendation_request("{}".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let parsed = json_body(response).await;
    assert_eq!(parsed["error"], "invalid_request");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = app()
        .oneshot(recommendation_request("{\"input_text\":".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/recommendation")
        .body(Body::from(json!({ "input_text": "delay" }).to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

fn oversized_body() -> String {
    json!({ "input_text": "delay ".repeat(MAX_BODY_BYTES / 6 + 1024) }).to_string()
}

async fn assert_payload_too_large(response: axum::response::Response) {
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let parsed = json_body(response).await;
    assert_eq!(parsed["error"], "payload_too_large");
    assert!(parsed["message"].is_string());
}

#[tokio::test]
async fn oversized_body_with_content_length_is_json_413() {
    let body = oversized_body();
    let request = Request::builder()
        .method("POST")
        .uri("/recommendation")
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(Body::from(body))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_payload_too_large(response).await;
}

#[tokio::test]
async fn oversized_body_without_content_length_is_json_413() {
    let response = app()
        .oneshot(recommendation_request(oversized_body()))
        .await
        .unwrap();
    assert_payload_too_large(response).await;
}

#[tokio::test]
async fn body_just_under_limit_is_accepted() {
    let text = "x".repeat(MAX_BODY_BYTES - 64);
    let parsed = recommend(app(), &text).await;
    assert_eq!(parsed["response"], expected(Category::General));
}

#[tokio::test]
async fn serve_reports_unbindable_address() {
    let err = serve(ApiConfig {
        bind: "not-an-address".to_string(),
        ..ApiConfig::default()
    })
    .await
    .unwrap_err();

    assert!(err.to_string().contains("failed to bind not-an-address"));
}

#[tokio::test]
async fn health_reports_request_counts() {
    let app = app();
    recommend(app.clone(), "weather check").await;
    recommend(app.clone(), "delayed again").await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = json_body(response).await;
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["metrics"]["requests_total"], 2);
    assert_eq!(parsed["metrics"]["categories"]["weather"], 1);
    assert_eq!(parsed["metrics"]["categories"]["delay"], 1);
}

#[tokio::test]
async fn root_and_version_describe_the_service() {
    let app = build_app(ApiConfig {
        environment: "staging".to_string(),
        ..ApiConfig::default()
    });

    let root = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(root.status(), StatusCode::OK);
    let info = json_body(root).await;
    assert_eq!(info["service"], "flight-assist");
    assert_eq!(
        info["categories"],
        json!(["delay", "cancellation", "weather", "general"])
    );

    let version = app
        .oneshot(Request::builder().uri("/version").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let parsed = json_body(version).await;
    assert_eq!(parsed["environment"], "staging");
    assert!(parsed["version"].is_string());
}

#[tokio::test]
async fn cors_preflight_allows_any_origin_by_default() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/recommendation")
        .header("origin", "https://kiosk.example")
        .header("access-control-request-method", "POST")
        .header(
            "access-control-request-headers",
            "content-type,x-request-id,authorization",
        )
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
    assert_eq!(
        headers
            .get("access-control-allow-headers")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn cors_allow_list_echoes_configured_origin() {
    let app = build_app(ApiConfig {
        allowed_origins: vec!["https://ops.example".to_string()],
        ..ApiConfig::default()
    });
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/recommendation")
        .header("origin", "https://ops.example")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type,x-request-id")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("https://ops.example")
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|value| value.to_str().ok()),
        Some("true")
    );
    let allowed = headers
        .get("access-control-allow-headers")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(allowed.contains("x-request-id"), "allowed headers: {allowed}");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn concurrent_requests_are_independent() {
    let app = app();
    let inputs = ["delay", "cancel", "weather", "hello", "DELAYED", "Weather?"];

    let handles = inputs
        .iter()
        .map(|text| {
            let app = app.clone();
            let text = text.to_string();
            tokio::spawn(async move { recommend(app, &text).await })
        })
        .collect::<Vec<_>>();

    let expected_categories = [
        Category::Delay,
        Category::Cancellation,
        Category::Weather,
        Category::General,
        Category::Delay,
        Category::Weather,
    ];
    for (handle, category) in handles.into_iter().zip(expected_categories) {
        let parsed = handle.await.unwrap();
        assert_eq!(parsed["response"], expected(category));
    }
}

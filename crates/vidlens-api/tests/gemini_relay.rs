//! End-to-end relay tests against a stubbed Gemini endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vidlens_api::{create_router, ApiConfig, AppState};
use vidlens_gemini::GeminiConfig;

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig {
        google_api_key: Some("test-key".to_string()),
        gemini: GeminiConfig {
            api_base: server.uri(),
            model: "gemini-test".to_string(),
            timeout: None,
        },
        ..ApiConfig::default()
    }
}

async fn analyze(config: ApiConfig) -> (StatusCode, Value) {
    let app = create_router(AppState::new(config).unwrap(), None);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/analyze-video")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    json!({
                        "prompt": "Where does the user get lost?",
                        "videoUrl": "https://example.com/session.mov"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_relays_candidate_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Hello"}], "role": "model"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = analyze(config_for(&server)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": "Hello"}));
}

#[tokio::test]
async fn test_overloaded_provider_makes_single_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = analyze(config_for(&server)).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "provider_overloaded");
}

#[tokio::test]
async fn test_provider_error_body_is_preserved() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal boom"))
        .mount(&server)
        .await;

    let (status, body) = analyze(config_for(&server)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "provider_error");
    assert_eq!(body["error"], "Gemini API error: 500 - internal boom");
}

#[tokio::test]
async fn test_missing_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let (status, body) = analyze(config_for(&server)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "empty_response");
}

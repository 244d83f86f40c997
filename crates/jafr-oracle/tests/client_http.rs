//! Drives `ChatCompletionClient` against a local axum stand-in for the provider.

use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use jafr_config::OracleConfig;
use jafr_oracle::{ChatCompletionClient, NarrativeOracle, NarrativeRequest, OracleError};
use serde_json::{Value, json};

const KEY: &str = "sk-test-0123456789abcdef";

async fn completions(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if auth != format!("Bearer {KEY}") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "bad key"}))).into_response();
    }

    let user = body["messages"][1]["content"].as_str().unwrap_or_default();
    let reply = format!(
        "model={} max_tokens={} user={user}",
        body["model"].as_str().unwrap_or_default(),
        body["max_tokens"]
    );
    Json(json!({
        "choices": [{"index": 0, "message": {"role": "assistant", "content": reply}}]
    }))
    .into_response()
}

async fn rate_limited() -> impl IntoResponse {
    (
        StatusCode::TOO_MANY_REQUESTS,
        [(header::RETRY_AFTER, "42")],
        "slow down",
    )
}

async fn slow() -> impl IntoResponse {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({"choices": []}))
}

async fn empty_choices() -> impl IntoResponse {
    Json(json!({"choices": []}))
}

/// Serve the stand-in on an ephemeral port and return its `/v1` root.
async fn spawn_provider() -> String {
    let app = Router::new()
        .route("/ok/v1/chat/completions", post(completions))
        .route("/limited/v1/chat/completions", post(rate_limited))
        .route("/slow/v1/chat/completions", post(slow))
        .route("/empty/v1/chat/completions", post(empty_choices));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base: &str, scenario: &str, timeout_secs: u64) -> ChatCompletionClient {
    let config = OracleConfig {
        base_url: format!("{base}/{scenario}/v1"),
        model: "test-model".into(),
        timeout_secs,
        ..OracleConfig::default()
    };
    ChatCompletionClient::new(&config).unwrap()
}

fn request() -> NarrativeRequest {
    NarrativeRequest {
        system: "أنت خبير".into(),
        user: "المجموع 92".into(),
        max_tokens: 321,
    }
}

#[tokio::test]
async fn successful_completion_returns_text() {
    let base = spawn_provider().await;
    let text = client(&base, "ok", 10)
        .generate_narrative(&request(), KEY)
        .await
        .unwrap();
    assert_eq!(text, "model=test-model max_tokens=321 user=المجموع 92");
}

#[tokio::test]
async fn rejected_key_is_auth_rejected() {
    let base = spawn_provider().await;
    let err = client(&base, "ok", 10)
        .generate_narrative(&request(), "sk-wrong-key-0000000000")
        .await
        .unwrap_err();
    assert!(matches!(err, OracleError::AuthRejected { status: 401 }));
}

#[tokio::test]
async fn rate_limit_hint_is_surfaced() {
    let base = spawn_provider().await;
    let err = client(&base, "limited", 10)
        .generate_narrative(&request(), KEY)
        .await
        .unwrap_err();
    assert_eq!(err.retry_after_secs(), Some(42));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let base = spawn_provider().await;
    let err = client(&base, "slow", 1)
        .generate_narrative(&request(), KEY)
        .await
        .unwrap_err();
    assert!(matches!(err, OracleError::Timeout { after_secs: 1 }), "{err}");
}

#[tokio::test]
async fn empty_choices_are_malformed() {
    let base = spawn_provider().await;
    let err = client(&base, "empty", 10)
        .generate_narrative(&request(), KEY)
        .await
        .unwrap_err();
    assert!(matches!(err, OracleError::MalformedResponse(_)));
}

#[tokio::test]
async fn unreachable_provider_is_transport_error() {
    let err = client("http://127.0.0.1:1", "ok", 10)
        .generate_narrative(&request(), KEY)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), "transport");
}

#[tokio::test]
#[ignore] // requires network and OPENAI_API_KEY
async fn live_completion() {
    let Ok(key) = std::env::var("OPENAI_API_KEY") else {
        eprintln!("SKIP: OPENAI_API_KEY not set");
        return;
    };
    let client = ChatCompletionClient::new(&OracleConfig::default()).unwrap();
    let text = client.generate_narrative(&request(), &key).await.unwrap();
    println!("{text}");
    assert!(!text.is_empty());
}

use std::any::Any;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;
use crate::error::AnalysisError;

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        // Analysis
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/numerology", post(handlers::numerology))
        .route("/api/validate-key", post(handlers::validate_key))
        // State and middleware
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Outermost boundary: a panicking handler still yields a JSON 500.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(ToString::to_string))
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(%message, "handler panicked");
    AnalysisError::Internal(message).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{StubOracle, VALID_KEY, app_state};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use jafr_oracle::OracleError;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::time::Duration;
    use tower::ServiceExt;

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value, Option<String>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body, retry_after)
    }

    fn post_json(uri: &str, body: &Value, key: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(key) = key {
            builder = builder.header(handlers::API_KEY_HEADER, key);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn form() -> Value {
        json!({
            "name": "محمد",
            "mother": "فاطمة",
            "question": "هل أسافر؟",
            "birthDate": "1990-05-17",
            "options": {"numerologyDetails": true}
        })
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (state, _) = app_state(StubOracle::reply("x"));
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body, _) = send(create_router(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn analyze_returns_traditional_and_narrative() {
        let (state, stub) = app_state(StubOracle::reply("### التفسير\nقراءة طيبة"));
        let request = post_json("/api/analyze", &form(), Some(VALID_KEY));
        let (status, body, retry_after) = send(create_router(state), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["traditionalResults"]["name"]["total"], 92);
        assert_eq!(body["traditionalResults"]["birth"]["total"], 32);
        assert_eq!(
            body["traditionalResults"]["name"]["letters"][0]["character"],
            "م"
        );
        assert_eq!(body["aiAnalysis"]["interpretation"], "قراءة طيبة");
        assert_eq!(body["aiStatus"]["state"], "succeeded");
        assert!(
            body["combinedInterpretation"]
                .as_str()
                .unwrap()
                .contains("قراءة طيبة")
        );
        assert_eq!(retry_after, None);
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn bearer_header_is_accepted() {
        let (state, stub) = app_state(StubOracle::reply("نص"));
        let request = Request::post("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {VALID_KEY}"))
            .body(Body::from(form().to_string()))
            .unwrap();
        let (status, _, _) = send(create_router(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stub.last_credential().as_deref(), Some(VALID_KEY));
    }

    #[tokio::test]
    async fn missing_question_is_400_with_labels() {
        let (state, stub) = app_state(StubOracle::reply("x"));
        let body = json!({"name": "محمد", "motherName": "فاطمة"});
        let (status, body, _) =
            send(create_router(state), post_json("/api/analyze", &body, Some(VALID_KEY))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["missingFields"], json!(["السؤال"]));
        assert!(body["error"].as_str().unwrap().contains("السؤال"));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn malformed_credential_is_401_without_oracle_call() {
        let (state, stub) = app_state(StubOracle::reply("x"));
        let request = post_json("/api/analyze", &form(), Some("bad-key"));
        let (status, body, _) = send(create_router(state), request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn rate_limit_sets_retry_after_header() {
        let (state, _) = app_state(StubOracle::fail(|| OracleError::RateLimited {
            retry_after_secs: 25,
        }));
        let request = post_json("/api/analyze", &form(), Some(VALID_KEY));
        let (status, body, retry_after) = send(create_router(state), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["aiStatus"]["retryAfterSecs"], 25);
        assert_eq!(retry_after.as_deref(), Some("25"));
        assert_eq!(body["traditionalResults"]["combinedTotal"], 227);
    }

    #[tokio::test(start_paused = true)]
    async fn oracle_timeout_still_succeeds() {
        let (state, _) = app_state(StubOracle::hang(Duration::from_secs(300)));
        let request = post_json("/api/analyze", &form(), Some(VALID_KEY));
        let (status, body, _) = send(create_router(state), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["aiStatus"]["error"], "timeout");
        assert_eq!(
            body["aiAnalysis"]["interpretation"],
            jafr_core::responses::PLACEHOLDER_INTERPRETATION
        );
    }

    #[tokio::test]
    async fn invalid_json_is_400() {
        let (state, _) = app_state(StubOracle::reply("x"));
        let request = Request::post("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body, _) = send(create_router(state), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn numerology_endpoint_skips_oracle_and_key() {
        let (state, stub) = app_state(StubOracle::reply("x"));
        let request = post_json("/api/numerology", &form(), None);
        let (status, body, _) = send(create_router(state), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["traditionalResults"]["reducedValue"], 2);
        assert!(body.get("aiAnalysis").is_none());
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn validate_key_reports_format_only() {
        let (state, stub) = app_state(StubOracle::reply("x"));
        let router = create_router(state);

        let ok = post_json("/api/validate-key", &json!({"apiKey": VALID_KEY}), None);
        let (status, body, _) = send(router.clone(), ok).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["valid"], true);

        let short = post_json("/api/validate-key", &json!({"apiKey": "sk-1"}), None);
        let (_, body, _) = send(router, short).await;
        assert_eq!(body["valid"], false);
        assert!(body["error"].is_string());
        assert_eq!(stub.calls(), 0);
    }

    #[test]
    fn panic_payloads_become_internal_errors() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let response = panic_response(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

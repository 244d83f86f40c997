use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
};
use jafr_core::AnalysisRequest;
use jafr_core::responses::{HealthResponse, KeyValidationResponse, NumerologyResponse};
use serde::Deserialize;

use crate::error::AnalysisError;
use crate::server::state::AppState;

/// Header carrying the caller's oracle credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// GET /health
#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/analyze - traditional results plus oracle narrative
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Response, AnalysisError> {
    let Json(request) = payload.map_err(|e| AnalysisError::MalformedBody(e.body_text()))?;
    tracing::info!(
        deep = request.options.deep_analysis,
        details = request.options.numerology_details,
        "analysis requested"
    );

    let response = state
        .analyzer()
        .analyze(&request, header_credential(&headers))
        .await?;

    let retry_after = response.ai_status.retry_after_secs;
    let mut http = Json(response).into_response();
    if let Some(secs) = retry_after {
        http.headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(secs));
    }
    Ok(http)
}

/// POST /api/numerology - traditional results only
pub async fn numerology(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<NumerologyResponse>, AnalysisError> {
    let Json(request) = payload.map_err(|e| AnalysisError::MalformedBody(e.body_text()))?;
    let traditional_results = state.analyzer().numerology(&request)?;
    Ok(Json(NumerologyResponse {
        success: true,
        traditional_results,
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValidationRequest {
    #[serde(default)]
    api_key: Option<String>,
}

/// POST /api/validate-key - local format check, no network
pub async fn validate_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<KeyValidationRequest>, JsonRejection>,
) -> Json<KeyValidationResponse> {
    let body_key = payload.ok().and_then(|Json(body)| body.api_key);
    let key = header_credential(&headers)
        .map(str::to_string)
        .or(body_key)
        .unwrap_or_default();

    let response = match state.analyzer().policy().validate(&key) {
        Ok(()) => KeyValidationResponse {
            valid: true,
            error: None,
        },
        Err(error) => KeyValidationResponse {
            valid: false,
            error: Some(error.to_string()),
        },
    };
    Json(response)
}

/// Credential from `x-api-key`, or from `Authorization: Bearer …`.
fn header_credential(headers: &HeaderMap) -> Option<&str> {
    let from_api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    from_api_key.or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    })
}

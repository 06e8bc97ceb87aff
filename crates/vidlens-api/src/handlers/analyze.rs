//! Analyze-video handler.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use vidlens_models::{AnalysisOutput, AnalyzeVideoRequest};

use crate::error::{ApiError, ApiResult};
use crate::metrics;
use crate::state::AppState;

/// Relay a `{prompt, videoUrl}` body to the provider.
///
/// The body is buffered and decoded by hand so that oversized or
/// undecodable input surfaces as the same `{error}` JSON shape as every
/// other failure.
pub async fn analyze_video(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<AnalysisOutput>> {
    let result = match body {
        Ok(body) => match serde_json::from_slice::<AnalyzeVideoRequest>(&body) {
            Ok(request) => state.relay.analyze(&request).await,
            Err(e) => Err(ApiError::internal(e.to_string())),
        },
        Err(rejection) => Err(body_rejection(rejection, state.config.max_body_size)),
    };

    metrics::record_analysis(match &result {
        Ok(_) => "success",
        Err(e) => e.category().as_str(),
    });

    result.map(Json)
}

fn body_rejection(rejection: BytesRejection, limit: usize) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge { limit }
    } else {
        ApiError::internal(rejection.body_text())
    }
}

//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use vidlens_gemini::GeminiError;
use vidlens_models::{ErrorBody, ErrorCategory, ValidationError};

pub type ApiResult<T> = Result<T, ApiError>;

/// Every way an analysis can fail. The display text is the `error` string
/// sent to the browser.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Google API Key not configured")]
    MissingCredential,

    #[error("The Gemini API is currently overloaded. Please try again in a few minutes.")]
    ProviderOverloaded,

    #[error(
        "Invalid request. Please check that your video URL is accessible and in a supported format."
    )]
    InvalidProviderRequest,

    #[error("Gemini API error: {status} - {body}")]
    Provider { status: u16, body: String },

    #[error("No valid response from Gemini API")]
    EmptyResponse,

    #[error("Request body exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Validation(e) => e.category(),
            ApiError::PayloadTooLarge { .. } => ErrorCategory::InvalidInput,
            ApiError::MissingCredential => ErrorCategory::ConfigurationError,
            ApiError::ProviderOverloaded => ErrorCategory::ProviderOverloaded,
            ApiError::InvalidProviderRequest => ErrorCategory::InvalidRequestToProvider,
            ApiError::Provider { .. } => ErrorCategory::ProviderError,
            ApiError::EmptyResponse => ErrorCategory::EmptyResponse,
            ApiError::Internal(_) => ErrorCategory::Unknown,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        let status = match self {
            ApiError::Provider { status, .. } => *status,
            ApiError::PayloadTooLarge { .. } => 413,
            other => other.category().default_status(),
        };
        StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
    }
}

impl From<GeminiError> for ApiError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Overloaded(_) => ApiError::ProviderOverloaded,
            GeminiError::BadRequest(_) => ApiError::InvalidProviderRequest,
            GeminiError::Upstream { status, body } => ApiError::Provider { status, body },
            GeminiError::EmptyResponse => ApiError::EmptyResponse,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
            code: self.category(),
        };

        (status, Json(body)).into_response()
    }
}

//! Gemini client error types.

use thiserror::Error;

pub type GeminiResult<T> = Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API overloaded: {0}")]
    Overloaded(String),

    #[error("Gemini API rejected the request: {0}")]
    BadRequest(String),

    #[error("Gemini API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("No valid response from Gemini API")]
    EmptyResponse,

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeminiError {
    /// Map a non-success provider status and its raw body to an error.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            503 => GeminiError::Overloaded(body),
            400 => GeminiError::BadRequest(body),
            _ => GeminiError::Upstream { status, body },
        }
    }

    /// Wrap a transport error.
    ///
    /// The API key travels in the query string, so the URL is stripped
    /// before the error can reach a log line or a response body.
    pub fn network(err: reqwest::Error) -> Self {
        GeminiError::Network(err.without_url())
    }

    /// Provider status code, when the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            GeminiError::Overloaded(_) => Some(503),
            GeminiError::BadRequest(_) => Some(400),
            GeminiError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

//! Client-facing error categories.

use serde::{Deserialize, Serialize};

/// Category of a failed analysis, reported to the caller as `code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Prompt or video URL missing or empty
    InvalidInput,
    /// URL points at a video-hosting page instead of a file
    UnsupportedSource,
    /// URL does not end in a recognized video extension
    UnsupportedFormat,
    /// Provider credential not configured on the server
    ConfigurationError,
    /// Provider answered 503
    ProviderOverloaded,
    /// Provider answered 400
    InvalidRequestToProvider,
    /// Any other non-2xx provider answer
    ProviderError,
    /// Provider answered 2xx without candidate content
    EmptyResponse,
    /// Unexpected failure while processing
    Unknown,
}

impl ErrorCategory {
    /// Get string representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::UnsupportedSource => "unsupported_source",
            ErrorCategory::UnsupportedFormat => "unsupported_format",
            ErrorCategory::ConfigurationError => "configuration_error",
            ErrorCategory::ProviderOverloaded => "provider_overloaded",
            ErrorCategory::InvalidRequestToProvider => "invalid_request_to_provider",
            ErrorCategory::ProviderError => "provider_error",
            ErrorCategory::EmptyResponse => "empty_response",
            ErrorCategory::Unknown => "unknown",
        }
    }

    /// Default HTTP status for this category.
    ///
    /// `ProviderError` mirrors the provider's own status; 502 is only used
    /// when that status is not available.
    pub fn default_status(&self) -> u16 {
        match self {
            ErrorCategory::InvalidInput
            | ErrorCategory::UnsupportedSource
            | ErrorCategory::UnsupportedFormat
            | ErrorCategory::InvalidRequestToProvider => 400,
            ErrorCategory::ProviderOverloaded => 503,
            ErrorCategory::ProviderError => 502,
            ErrorCategory::ConfigurationError
            | ErrorCategory::EmptyResponse
            | ErrorCategory::Unknown => 500,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

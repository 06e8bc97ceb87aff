//! Analyze-video request models and validation.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use url::Url;

use crate::category::ErrorCategory;
use crate::video_url::{check_video_url, VideoUrlCheck};

/// MIME type sent to the provider for every video reference.
///
/// The relay never sniffs or re-encodes the file; the provider fetches and
/// interprets the remote URL itself.
pub const VIDEO_MIME_TYPE: &str = "video/mp4";

/// Request body posted by the submission form.
///
/// Both fields are optional on the wire so that a missing or non-string
/// field is reported as invalid input rather than a decoding failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeVideoRequest {
    /// Free-text analysis prompt
    #[serde(default, deserialize_with = "string_or_none")]
    pub prompt: Option<String>,
    /// Publicly reachable URL of a video file
    #[serde(default, deserialize_with = "string_or_none")]
    pub video_url: Option<String>,
}

/// Keep string values; any other JSON type reads as absent.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(#[allow(dead_code)] IgnoredAny),
    }

    Ok(match Option::<Field>::deserialize(deserializer)? {
        Some(Field::Text(text)) => Some(text),
        Some(Field::Other(_)) | None => None,
    })
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub prompt: String,
    pub video_url: Url,
}

/// Reference to a remote file handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    pub file_uri: String,
    pub mime_type: String,
}

impl FileReference {
    /// Reference a remote video, assuming `video/mp4`.
    pub fn video(url: &Url) -> Self {
        Self {
            file_uri: url.to_string(),
            mime_type: VIDEO_MIME_TYPE.to_string(),
        }
    }
}

/// Validation failures, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing prompt or videoUrl")]
    MissingField,

    #[error(
        "{0} URLs are not supported. Please provide a direct video file URL \
         (e.g., https://example.com/video.mp4). You can upload your video to a file \
         hosting service or use a direct MP4 link."
    )]
    UnsupportedSource(&'static str),

    #[error(
        "Please provide a direct video file URL ending with .mp4, .mov, .avi, or .webm \
         (e.g., https://example.com/video.mp4)"
    )]
    UnsupportedFormat,
}

impl ValidationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidationError::MissingField => ErrorCategory::InvalidInput,
            ValidationError::UnsupportedSource(_) => ErrorCategory::UnsupportedSource,
            ValidationError::UnsupportedFormat => ErrorCategory::UnsupportedFormat,
        }
    }
}

impl AnalyzeVideoRequest {
    pub fn new(prompt: impl Into<String>, video_url: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            video_url: Some(video_url.into()),
        }
    }

    /// Validate the request, short-circuiting on the first failure.
    ///
    /// Order: presence of both fields, hosting-platform host, video
    /// extension. Whitespace-only values count as missing.
    pub fn validate(&self) -> Result<AnalysisRequest, ValidationError> {
        let prompt = non_empty(self.prompt.as_deref()).ok_or(ValidationError::MissingField)?;
        let video_url =
            non_empty(self.video_url.as_deref()).ok_or(ValidationError::MissingField)?;

        match check_video_url(video_url) {
            VideoUrlCheck::Direct(url) => Ok(AnalysisRequest {
                prompt: prompt.to_string(),
                video_url: url,
            }),
            VideoUrlCheck::HostingPlatform(platform) => {
                Err(ValidationError::UnsupportedSource(platform))
            }
            VideoUrlCheck::UnsupportedFormat => Err(ValidationError::UnsupportedFormat),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl AnalysisRequest {
    /// File reference for the provider call.
    pub fn file_reference(&self) -> FileReference {
        FileReference::video(&self.video_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_camel_case() {
        let request: AnalyzeVideoRequest = serde_json::from_str(
            r#"{"prompt":"Summarize","videoUrl":"https://example.com/a.mp4"}"#,
        )
        .unwrap();
        assert_eq!(request.prompt.as_deref(), Some("Summarize"));
        assert_eq!(request.video_url.as_deref(), Some("https://example.com/a.mp4"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        let request: AnalyzeVideoRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_non_string_fields_are_invalid_input() {
        for body in [
            r#"{"prompt":42,"videoUrl":"https://example.com/a.mp4"}"#,
            r#"{"prompt":"Summarize","videoUrl":["https://example.com/a.mp4"]}"#,
            r#"{"prompt":null,"videoUrl":"https://example.com/a.mp4"}"#,
            r#"{"prompt":{"text":"Summarize"},"videoUrl":true}"#,
        ] {
            let request: AnalyzeVideoRequest = serde_json::from_str(body).unwrap();
            assert_eq!(request.validate(), Err(ValidationError::MissingField), "{}", body);
        }
    }

    #[test]
    fn test_empty_and_blank_fields_are_invalid_input() {
        let cases = [
            AnalyzeVideoRequest::new("", "https://example.com/a.mp4"),
            AnalyzeVideoRequest::new("   ", "https://example.com/a.mp4"),
            AnalyzeVideoRequest::new("Summarize", ""),
            AnalyzeVideoRequest {
                prompt: Some("Summarize".to_string()),
                video_url: None,
            },
        ];
        for request in cases {
            let err = request.validate().unwrap_err();
            assert_eq!(err.category(), ErrorCategory::InvalidInput);
        }
    }

    #[test]
    fn test_missing_field_checked_before_url() {
        let request = AnalyzeVideoRequest::new("", "https://youtu.be/abc");
        assert_eq!(request.validate(), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_hosting_platform_rejected() {
        let request = AnalyzeVideoRequest::new("Summarize", "https://youtu.be/abc");
        let err = request.validate().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::UnsupportedSource);
        assert!(err.to_string().starts_with("YouTube URLs are not supported"));
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let request = AnalyzeVideoRequest::new("Summarize", "https://example.com/page.html");
        let err = request.validate().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::UnsupportedFormat);
        assert!(err.to_string().contains(".mp4, .mov, .avi, or .webm"));
    }

    #[test]
    fn test_valid_request() {
        let request = AnalyzeVideoRequest::new("Summarize", " https://example.com/a.MP4 ");
        let validated = request.validate().unwrap();
        assert_eq!(validated.prompt, "Summarize");
        assert_eq!(validated.video_url.as_str(), "https://example.com/a.MP4");

        let file = validated.file_reference();
        assert_eq!(file.file_uri, "https://example.com/a.MP4");
        assert_eq!(file.mime_type, "video/mp4");
    }
}

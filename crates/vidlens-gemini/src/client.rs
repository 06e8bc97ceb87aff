//! Gemini HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};
use vidlens_models::FileReference;

use crate::config::GeminiConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::provider::VideoAnalysisProvider;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Gemini API client.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(api_key: impl Into<String>, config: GeminiConfig) -> GeminiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(GeminiError::network)?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            config,
        })
    }
}

#[async_trait]
impl VideoAnalysisProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str, file: &FileReference) -> GeminiResult<String> {
        let url = self.config.generate_content_url();
        let request = GenerateContentRequest::new(prompt, file);

        debug!(
            model = %self.config.model,
            file_uri = %file.file_uri,
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(GeminiError::network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                model = %self.config.model,
                body = %body,
                "Gemini API returned an error"
            );
            return Err(GeminiError::from_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await.map_err(GeminiError::network)?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        parsed.into_text().ok_or(GeminiError::EmptyResponse)
    }
}

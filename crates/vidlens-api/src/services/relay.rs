//! Relay between the analysis form and the generative-AI provider.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info, warn};
use vidlens_gemini::VideoAnalysisProvider;
use vidlens_models::{AnalysisOutput, AnalyzeVideoRequest};

use crate::error::{ApiError, ApiResult};
use crate::metrics;

/// Validates analysis requests and forwards them to the provider.
///
/// Stateless across calls: one provider attempt per request, no retries.
/// A `None` provider means no credential was configured; every request that
/// passes validation then fails with a configuration error.
#[derive(Clone)]
pub struct RelayService {
    provider: Option<Arc<dyn VideoAnalysisProvider>>,
}

impl RelayService {
    pub fn new(provider: Option<Arc<dyn VideoAnalysisProvider>>) -> Self {
        Self { provider }
    }

    /// Check whether a provider credential is configured.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Validate `request` and run the analysis.
    pub async fn analyze(&self, request: &AnalyzeVideoRequest) -> ApiResult<AnalysisOutput> {
        let validated = request.validate().map_err(|e| {
            info!(category = %e.category(), "Rejected analysis request: {}", e);
            ApiError::from(e)
        })?;

        let provider = self.provider.as_ref().ok_or_else(|| {
            error!("Provider credential not configured; set GOOGLE_API_KEY");
            ApiError::MissingCredential
        })?;

        info!(
            provider = provider.name(),
            video_url = %validated.video_url,
            prompt_len = validated.prompt.len(),
            "Analyzing video"
        );

        let file = validated.file_reference();
        let start = Instant::now();
        let result = provider.generate(&validated.prompt, &file).await;
        let elapsed = start.elapsed();
        metrics::record_provider_call(provider.name(), elapsed.as_secs_f64(), result.is_ok());

        match result {
            Ok(text) => {
                info!(
                    duration_ms = elapsed.as_millis() as u64,
                    result_len = text.len(),
                    "Analysis completed"
                );
                Ok(AnalysisOutput::new(text))
            }
            Err(e) => {
                warn!(
                    provider_status = ?e.status(),
                    duration_ms = elapsed.as_millis() as u64,
                    "Provider call failed: {}",
                    e
                );
                Err(ApiError::from(e))
            }
        }
    }
}

//! Application state.

use std::sync::Arc;

use tracing::warn;
use vidlens_gemini::{GeminiClient, GeminiResult, VideoAnalysisProvider};

use crate::config::ApiConfig;
use crate::services::RelayService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub relay: RelayService,
}

impl AppState {
    /// Create application state with the production Gemini client.
    ///
    /// A missing credential is not fatal here: the server starts and each
    /// analysis request reports the configuration error instead.
    pub fn new(config: ApiConfig) -> GeminiResult<Self> {
        let provider: Option<Arc<dyn VideoAnalysisProvider>> = match &config.google_api_key {
            Some(key) => Some(Arc::new(GeminiClient::new(key.clone(), config.gemini.clone())?)),
            None => {
                warn!("GOOGLE_API_KEY is not set; analysis requests will fail until it is configured");
                None
            }
        };

        Ok(Self::with_provider(config, provider))
    }

    /// Create application state around an explicit provider.
    pub fn with_provider(
        config: ApiConfig,
        provider: Option<Arc<dyn VideoAnalysisProvider>>,
    ) -> Self {
        Self {
            config,
            relay: RelayService::new(provider),
        }
    }
}

//! Provider capability used by the relay.

use async_trait::async_trait;
use vidlens_models::FileReference;

use crate::error::GeminiResult;

/// A generative-AI backend that can analyze a remote video.
///
/// Implementations make exactly one attempt per call; retry policy belongs
/// to the caller.
#[async_trait]
pub trait VideoAnalysisProvider: Send + Sync {
    /// Short name used in logs and metrics.
    fn name(&self) -> &str;

    /// Generate text for `prompt` over the referenced video.
    async fn generate(&self, prompt: &str, file: &FileReference) -> GeminiResult<String>;
}

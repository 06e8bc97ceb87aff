//! Scripted provider for exercising the relay without network access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use vidlens_models::FileReference;

use crate::error::{GeminiError, GeminiResult};
use crate::provider::VideoAnalysisProvider;
use crate::types::GenerateContentResponse;

#[derive(Debug, Clone)]
enum Outcome {
    Text(String),
    Status { status: u16, body: String },
    Empty,
    RawBody(String),
}

/// Provider that returns a canned outcome and records its calls.
#[derive(Debug)]
pub struct MockProvider {
    outcome: Outcome,
    calls: AtomicUsize,
    last_call: Mutex<Option<(String, FileReference)>>,
}

impl MockProvider {
    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    /// Always answer with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Text(text.into()))
    }

    /// Always fail as if the provider answered `status` with `body`.
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Status {
            status,
            body: body.into(),
        })
    }

    /// Always answer 2xx without candidate content.
    pub fn empty() -> Self {
        Self::with_outcome(Outcome::Empty)
    }

    /// Always answer 2xx with `body`, decoded the way the HTTP client
    /// decodes it.
    pub fn with_raw_body(body: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::RawBody(body.into()))
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompt and file of the most recent call.
    pub fn last_call(&self) -> Option<(String, FileReference)> {
        self.last_call
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl VideoAnalysisProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str, file: &FileReference) -> GeminiResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_call.lock() {
            *last = Some((prompt.to_string(), file.clone()));
        }

        match &self.outcome {
            Outcome::Text(text) => Ok(text.clone()),
            Outcome::Status { status, body } => Err(GeminiError::from_status(*status, body.clone())),
            Outcome::Empty => Err(GeminiError::EmptyResponse),
            Outcome::RawBody(body) => {
                let parsed: GenerateContentResponse = serde_json::from_str(body)?;
                parsed.into_text().ok_or(GeminiError::EmptyResponse)
            }
        }
    }
}

//! Response bodies returned to the submission form.

use serde::{Deserialize, Serialize};

use crate::category::ErrorCategory;

/// Successful analysis: `{"result": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    pub result: String,
}

impl AnalysisOutput {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

/// Failed analysis: `{"error": "...", "code": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: ErrorCategory,
}

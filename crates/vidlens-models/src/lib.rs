//! Shared data models for the VidLens relay.
//!
//! This crate provides Serde-serializable types for:
//! - The analyze-video request body and its validated form
//! - The relay's error taxonomy
//! - Direct video URL policy (hosting platforms, file extensions)
//! - Response bodies returned to the browser

pub mod category;
pub mod request;
pub mod response;
pub mod video_url;

// Re-export common types
pub use category::ErrorCategory;
pub use request::{AnalysisRequest, AnalyzeVideoRequest, FileReference, ValidationError};
pub use response::{AnalysisOutput, ErrorBody};
pub use video_url::{check_video_url, VideoUrlCheck, SUPPORTED_EXTENSIONS};

//! Axum HTTP relay for video analysis.
//!
//! This crate provides:
//! - The analyze-video endpoint (validation, Gemini call, error mapping)
//! - Permissive CORS for the browser form
//! - Health/readiness probes
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::RelayService;
pub use state::AppState;

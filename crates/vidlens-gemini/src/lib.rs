//! Client for the Gemini generate-content API.
//!
//! This crate exposes the provider capability the relay depends on
//! (`generate(prompt, file) -> text`) as the [`VideoAnalysisProvider`] trait,
//! with one production implementation over HTTP ([`GeminiClient`]) and one
//! scripted test double ([`MockProvider`]).

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod provider;
pub mod types;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::{GeminiError, GeminiResult};
pub use mock::MockProvider;
pub use provider::VideoAnalysisProvider;

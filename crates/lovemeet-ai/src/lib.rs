//! AI-assisted drafting for the proposal composer and the date planner.
//!
//! The remote model is optional. Every public helper resolves to something
//! displayable: a fixed fallback message, or an empty venue list.

pub mod error;
pub mod gemini;
pub mod helper;

use async_trait::async_trait;
use serde_json::Value;

pub use error::AiError;
pub use gemini::{GeminiClient, GeminiConfig};
pub use helper::{FALLBACK_EMPTY, FALLBACK_ERROR, MessageHelper};

/// One generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    /// When set, the model is asked for JSON matching this schema.
    pub response_schema: Option<Value>,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// A remote text generator. Returns the raw text of the first candidate.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError>;
}

//! Upstream generative capability
//!
//! The dispatcher treats the AI provider as one opaque operation: generate
//! content for a model id given content parts and options. Keeping that
//! operation behind a trait lets the dispatch branching run against a
//! substitute provider in tests.

pub mod gemini;
pub mod mock;
pub mod types;

pub use gemini::GeminiClient;
pub use mock::MockGenerativeClient;

use crate::Result;
use async_trait::async_trait;
use types::{GenerateContentRequest, GenerateContentResponse};

#[async_trait]
pub trait GenerativeService: Send + Sync {
    async fn generate_content(
        &self,
        model: &str,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

//! LLM provider trait

use async_trait::async_trait;

use crate::error::Result;

/// Trait for LLM-based answer generation.
///
/// Implementations:
/// - `OpenAiLlm`: hosted OpenAI chat completions API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text for a fully assembled prompt
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}

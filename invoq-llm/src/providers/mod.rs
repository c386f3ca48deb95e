//! Completion provider implementations
//!
//! The gateway is polymorphic over the capability "submit a completion
//! prompt, obtain text back". Two real variants exist: a generate-style
//! endpoint (Ollama) and a chat-completion-style endpoint (OpenAI-compatible
//! servers), plus a mock for tests.

pub mod mock;
pub mod ollama;
pub mod openai;

pub use mock::MockCompletionProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use invoq_core::{InvoqError, InvoqResult, LlmError};

/// A text-completion backend.
/// Implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider identifier used in health reports and logs.
    fn name(&self) -> &'static str;

    /// Submit a prompt, obtain the raw response text.
    async fn complete(&self, prompt: &str) -> InvoqResult<String>;

    /// Cheap reachability check. Must not consume rate-limit budget.
    async fn probe(&self) -> InvoqResult<()>;
}

pub(crate) fn request_failed(
    provider: &str,
    status: i32,
    message: impl Into<String>,
) -> InvoqError {
    InvoqError::Llm(LlmError::RequestFailed {
        provider: provider.to_string(),
        status,
        message: message.into(),
    })
}

pub(crate) fn invalid_response(provider: &str, reason: impl Into<String>) -> InvoqError {
    InvoqError::Llm(LlmError::InvalidResponse {
        provider: provider.to_string(),
        reason: reason.into(),
    })
}

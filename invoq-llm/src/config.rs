//! Gateway configuration
//!
//! Configuration is loaded from environment variables with development
//! defaults matching a local Ollama install.

use std::time::Duration;

/// Which provider variant the gateway talks to.
///
/// Selected by static configuration, not per-call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Generate-style endpoint (Ollama `/api/generate`).
    #[default]
    Ollama,
    /// Chat-completion-style endpoint (OpenAI-compatible `/chat/completions`).
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "ollama",
            ProviderKind::OpenAi => "openai",
        }
    }
}

/// Model gateway configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Whether the external-model path is used at all.
    pub enabled: bool,
    /// Provider variant to use when enabled.
    pub provider: ProviderKind,

    /// Ollama server URL.
    pub ollama_base_url: String,
    /// Ollama model name.
    pub ollama_model: String,

    /// OpenAI-compatible server URL (including `/v1`).
    pub openai_base_url: String,
    /// Bearer token, empty for unauthenticated local servers.
    pub openai_api_key: String,
    /// OpenAI-compatible model name.
    pub openai_model: String,

    /// Requests-per-minute budget for the token bucket.
    pub requests_per_minute: u32,
    /// Per-call timeout.
    pub timeout: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: ProviderKind::Ollama,
            ollama_base_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.1".to_string(),
            openai_base_url: "http://localhost:1234/v1".to_string(),
            openai_api_key: String::new(),
            openai_model: "gpt-3.5-turbo".to_string(),
            requests_per_minute: 30,
            timeout: Duration::from_millis(15_000),
        }
    }
}

impl LlmConfig {
    /// Create LlmConfig from environment variables.
    ///
    /// Environment variables:
    /// - `INVOQ_LLM_ENABLED`: "true" or "false" (default: false)
    /// - `INVOQ_LLM_PROVIDER`: "ollama" or "openai" (default: ollama)
    /// - `INVOQ_OLLAMA_BASE_URL`, `INVOQ_OLLAMA_MODEL`
    /// - `INVOQ_OPENAI_BASE_URL`, `INVOQ_OPENAI_API_KEY`, `INVOQ_OPENAI_MODEL`
    /// - `INVOQ_LLM_RPM`: requests-per-minute budget (default: 30)
    /// - `INVOQ_LLM_TIMEOUT_MS`: per-call timeout (default: 15000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let enabled = std::env::var("INVOQ_LLM_ENABLED")
            .ok()
            .map(|s| s.to_lowercase() == "true")
            .unwrap_or(defaults.enabled);

        let provider = std::env::var("INVOQ_LLM_PROVIDER")
            .ok()
            .map(|s| match s.to_lowercase().as_str() {
                "openai" => ProviderKind::OpenAi,
                _ => ProviderKind::Ollama,
            })
            .unwrap_or(defaults.provider);

        let requests_per_minute = std::env::var("INVOQ_LLM_RPM")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.requests_per_minute);

        let timeout = std::env::var("INVOQ_LLM_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.timeout);

        Self {
            enabled,
            provider,
            ollama_base_url: std::env::var("INVOQ_OLLAMA_BASE_URL")
                .unwrap_or(defaults.ollama_base_url),
            ollama_model: std::env::var("INVOQ_OLLAMA_MODEL").unwrap_or(defaults.ollama_model),
            openai_base_url: std::env::var("INVOQ_OPENAI_BASE_URL")
                .unwrap_or(defaults.openai_base_url),
            openai_api_key: std::env::var("INVOQ_OPENAI_API_KEY")
                .unwrap_or(defaults.openai_api_key),
            openai_model: std::env::var("INVOQ_OPENAI_MODEL").unwrap_or(defaults.openai_model),
            requests_per_minute,
            timeout,
        }
    }
}

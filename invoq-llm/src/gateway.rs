//! Model gateway with rate limiting and silent degradation

use crate::config::{LlmConfig, ProviderKind};
use crate::extract::parse_intent;
use crate::providers::{CompletionProvider, OllamaProvider, OpenAiProvider};
use crate::rate_limit::TokenBucket;
use invoq_core::{Intent, LlmHealth};
use std::sync::Mutex;
use std::time::Duration;

/// Build the intent-extraction prompt for a user message.
pub fn build_intent_prompt(message: &str) -> String {
    format!(
        "You are an intent extractor for an enterprise invoice assistant.\n\
         Return ONLY a compact JSON object with fields: {{type, vendor, status, timeframe}}.\n\
         Types: filter_invoices | explain_failures | create_ticket | download_report | ticket_status | general.\n\
         Vendor and status may be null. Timeframe is one of: last_month, this_month, last_week, all.\n\
         Message: \"{}\"",
        message
    )
}

/// Gateway to an external completion model.
///
/// Every failure mode collapses to `None`: disabled gateway, exhausted
/// rate-limit budget, timeout, transport error, unparseable output. The
/// caller cannot distinguish them and is expected to fall back to heuristic
/// resolution.
pub struct IntentGateway {
    enabled: bool,
    provider: Option<Box<dyn CompletionProvider>>,
    provider_kind: ProviderKind,
    bucket: Mutex<TokenBucket>,
    timeout: Duration,
}

impl IntentGateway {
    /// Build a gateway from configuration, constructing the matching provider.
    pub fn from_config(config: &LlmConfig) -> Self {
        let provider: Option<Box<dyn CompletionProvider>> = if config.enabled {
            Some(match config.provider {
                ProviderKind::Ollama => Box::new(OllamaProvider::new(
                    config.ollama_base_url.clone(),
                    config.ollama_model.clone(),
                )),
                ProviderKind::OpenAi => Box::new(OpenAiProvider::new(
                    config.openai_base_url.clone(),
                    config.openai_api_key.clone(),
                    config.openai_model.clone(),
                )),
            })
        } else {
            None
        };

        Self {
            enabled: config.enabled,
            provider,
            provider_kind: config.provider,
            bucket: Mutex::new(TokenBucket::new(config.requests_per_minute)),
            timeout: config.timeout,
        }
    }

    /// Gateway with an injected provider, for tests.
    pub fn with_provider(
        provider: Box<dyn CompletionProvider>,
        requests_per_minute: u32,
        timeout: Duration,
    ) -> Self {
        Self {
            enabled: true,
            provider: Some(provider),
            provider_kind: ProviderKind::default(),
            bucket: Mutex::new(TokenBucket::new(requests_per_minute)),
            timeout,
        }
    }

    /// A disabled gateway; [`IntentGateway::extract_intent`] always yields `None`.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            provider: None,
            provider_kind: ProviderKind::default(),
            bucket: Mutex::new(TokenBucket::new(1)),
            timeout: Duration::from_millis(15_000),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Ask the model to classify `message` into an [`Intent`].
    ///
    /// Rate-limit rejection happens before any network traffic.
    pub async fn extract_intent(&self, message: &str) -> Option<Intent> {
        if !self.enabled {
            return None;
        }
        let provider = self.provider.as_ref()?;

        {
            let mut bucket = self.bucket.lock().ok()?;
            if !bucket.try_acquire() {
                tracing::debug!(provider = provider.name(), "rate limit reached, skipping model call");
                return None;
            }
        }

        let prompt = build_intent_prompt(message);
        let response = match tokio::time::timeout(self.timeout, provider.complete(&prompt)).await {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                tracing::warn!(provider = provider.name(), error = %e, "model call failed");
                return None;
            }
            Err(_) => {
                tracing::warn!(
                    provider = provider.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "model call timed out"
                );
                return None;
            }
        };

        let intent = parse_intent(&response);
        if intent.is_none() {
            tracing::warn!(provider = provider.name(), "model output contained no usable intent");
        }
        intent
    }

    /// Current health of the model path. Does not consume rate-limit budget.
    pub async fn health(&self) -> LlmHealth {
        let provider_name = self.provider_kind.as_str();
        if !self.enabled {
            return LlmHealth::disabled(provider_name);
        }
        let Some(provider) = self.provider.as_ref() else {
            return LlmHealth::unhealthy(provider_name, "no provider configured");
        };
        match provider.probe().await {
            Ok(()) => LlmHealth::healthy(provider.name()),
            Err(e) => LlmHealth::unhealthy(provider.name(), e.to_string()),
        }
    }
}

impl std::fmt::Debug for IntentGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentGateway")
            .field("enabled", &self.enabled)
            .field("provider", &self.provider_kind.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

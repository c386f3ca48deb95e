//! Model gateway health reporting

use serde::{Deserialize, Serialize};

/// Health probe result for the external-model gateway.
///
/// Probing never mutates rate-limit state; it only reports whether the
/// configured provider is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmHealth {
    pub enabled: bool,
    pub provider: String,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LlmHealth {
    /// The gateway is enabled and the provider answered.
    pub fn healthy(provider: impl Into<String>) -> Self {
        Self {
            enabled: true,
            provider: provider.into(),
            healthy: true,
            reason: None,
        }
    }

    /// The gateway is switched off by configuration.
    pub fn disabled(provider: impl Into<String>) -> Self {
        Self {
            enabled: false,
            provider: provider.into(),
            healthy: false,
            reason: Some("LLM disabled".to_string()),
        }
    }

    /// The gateway is enabled but the provider did not answer.
    pub fn unhealthy(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            enabled: true,
            provider: provider.into(),
            healthy: false,
            reason: Some(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_constructors() {
        let h = LlmHealth::healthy("ollama");
        assert!(h.enabled && h.healthy);
        assert!(h.reason.is_none());

        let d = LlmHealth::disabled("ollama");
        assert!(!d.enabled && !d.healthy);
        assert_eq!(d.reason.as_deref(), Some("LLM disabled"));

        let u = LlmHealth::unhealthy("openai", "connection refused");
        assert!(u.enabled && !u.healthy);
        assert_eq!(u.reason.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_health_serializes_without_reason_when_none() {
        let json = serde_json::to_string(&LlmHealth::healthy("ollama")).unwrap();
        assert!(!json.contains("reason"));
    }
}

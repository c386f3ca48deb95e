//! Model-first intent resolution

use crate::classify::classify;
use invoq_core::Intent;
use invoq_llm::IntentGateway;
use std::sync::Arc;

/// Resolves messages to intents, consulting the model gateway first when one
/// is enabled and falling back to the heuristic classifier otherwise.
///
/// A model intent is accepted as-is; the heuristics never override it.
#[derive(Debug, Clone)]
pub struct IntentResolver {
    gateway: Arc<IntentGateway>,
}

impl IntentResolver {
    pub fn new(gateway: Arc<IntentGateway>) -> Self {
        Self { gateway }
    }

    /// Resolver without a model path; every message goes through heuristics.
    pub fn heuristic_only() -> Self {
        Self {
            gateway: Arc::new(IntentGateway::disabled()),
        }
    }

    /// Resolve a message to an intent. Never fails; the heuristic classifier
    /// is total.
    pub async fn resolve(&self, message: &str) -> Intent {
        if let Some(intent) = self.gateway.extract_intent(message).await {
            tracing::debug!(intent = ?intent.intent_type, "intent resolved by model");
            return intent;
        }
        let intent = classify(message);
        tracing::debug!(intent = ?intent.intent_type, "intent resolved by heuristics");
        intent
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use invoq_core::IntentType;
    use invoq_llm::MockCompletionProvider;
    use std::time::Duration;

    #[tokio::test]
    async fn test_heuristic_only_resolution() {
        let resolver = IntentResolver::heuristic_only();
        let intent = resolver.resolve("filter invoices status=failed").await;
        assert_eq!(intent.intent_type, IntentType::FilterInvoices);
        assert_eq!(intent.status.as_deref(), Some("failed"));
    }

    #[tokio::test]
    async fn test_model_intent_wins_over_heuristics() {
        // The message reads as a filter request but the model says otherwise.
        let gateway = IntentGateway::with_provider(
            Box::new(MockCompletionProvider::always(r#"{"type":"ticket_status"}"#)),
            10,
            Duration::from_millis(500),
        );
        let resolver = IntentResolver::new(Arc::new(gateway));
        let intent = resolver.resolve("filter invoices").await;
        assert_eq!(intent.intent_type, IntentType::TicketStatus);
    }

    #[tokio::test]
    async fn test_model_garbage_falls_back_to_heuristics() {
        let gateway = IntentGateway::with_provider(
            Box::new(MockCompletionProvider::always("no json at all")),
            10,
            Duration::from_millis(500),
        );
        let resolver = IntentResolver::new(Arc::new(gateway));
        let intent = resolver.resolve("filter invoices vendor=GoAir").await;
        assert_eq!(intent.intent_type, IntentType::FilterInvoices);
        assert_eq!(intent.vendor.as_deref(), Some("GoAir"));
    }
}

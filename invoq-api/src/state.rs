//! Shared application state

use invoq_intent::IntentResolver;
use invoq_llm::{IntentGateway, LlmConfig};
use invoq_pipeline::ChatPipeline;
use invoq_storage::{
    ConversationStore, InMemoryConversationStore, InMemoryTicketStore, InvoiceSource,
    StaticInvoiceSource, TicketStore,
};
use std::sync::Arc;

/// Everything the route handlers need, cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ChatPipeline>,
    pub conversations: Arc<dyn ConversationStore>,
    pub tickets: Arc<dyn TicketStore>,
    pub invoices: Arc<dyn InvoiceSource>,
    pub gateway: Arc<IntentGateway>,
}

impl AppState {
    /// Wire up in-memory stores and the pipeline over a dataset.
    pub fn new(dataset: Vec<invoq_core::InvoiceRecord>, llm_config: &LlmConfig) -> Self {
        let conversations: Arc<dyn ConversationStore> = Arc::new(InMemoryConversationStore::new());
        let tickets: Arc<dyn TicketStore> = Arc::new(InMemoryTicketStore::new());
        let invoices: Arc<dyn InvoiceSource> = Arc::new(StaticInvoiceSource::new(dataset));
        let gateway = Arc::new(IntentGateway::from_config(llm_config));

        let pipeline = Arc::new(ChatPipeline::new(
            IntentResolver::new(gateway.clone()),
            conversations.clone(),
            tickets.clone(),
            invoices.clone(),
        ));

        Self {
            pipeline,
            conversations,
            tickets,
            invoices,
            gateway,
        }
    }
}

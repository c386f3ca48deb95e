//! RwLock-backed in-memory store implementations

use crate::traits::{ConversationStore, InvoiceSource, TicketStore};
use invoq_core::{Action, Conversation, InvoiceRecord, ReportId, StorageError, Ticket};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory conversation store keyed by session id.
#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    conversations: RwLock<HashMap<String, Conversation>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationStore for InMemoryConversationStore {
    fn get(&self, session_id: &str) -> Result<Option<Conversation>, StorageError> {
        let guard = self
            .conversations
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.get(session_id).cloned())
    }

    fn get_or_create(&self, session_id: &str) -> Result<Conversation, StorageError> {
        let mut guard = self
            .conversations
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard
            .entry(session_id.to_string())
            .or_insert_with(|| Conversation::new(session_id))
            .clone())
    }

    fn put(&self, conversation: Conversation) -> Result<(), StorageError> {
        let mut guard = self
            .conversations
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        guard.insert(conversation.session_id.clone(), conversation);
        Ok(())
    }

    fn find_action(&self, report_id: ReportId) -> Result<Option<Action>, StorageError> {
        let guard = self
            .conversations
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard
            .values()
            .flat_map(|conversation| conversation.actions.iter())
            .find(|action| action.report_id == report_id)
            .cloned())
    }

    fn count(&self) -> Result<usize, StorageError> {
        let guard = self
            .conversations
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.len())
    }
}

/// In-memory ticket store keyed by ticket id.
#[derive(Debug, Default)]
pub struct InMemoryTicketStore {
    tickets: RwLock<HashMap<String, Ticket>>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TicketStore for InMemoryTicketStore {
    fn get(&self, ticket_id: &str) -> Result<Option<Ticket>, StorageError> {
        let guard = self.tickets.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.get(ticket_id).cloned())
    }

    fn put(&self, ticket: Ticket) -> Result<(), StorageError> {
        let mut guard = self.tickets.write().map_err(|_| StorageError::LockPoisoned)?;
        guard.insert(ticket.id.clone(), ticket);
        Ok(())
    }

    fn list_by_session(&self, session_id: &str) -> Result<Vec<Ticket>, StorageError> {
        let guard = self.tickets.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut tickets: Vec<Ticket> = guard
            .values()
            .filter(|ticket| ticket.session_id == session_id)
            .cloned()
            .collect();
        tickets.sort_by(|a, b| a.created.cmp(&b.created));
        Ok(tickets)
    }

    fn list_all(&self) -> Result<Vec<Ticket>, StorageError> {
        let guard = self.tickets.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut tickets: Vec<Ticket> = guard.values().cloned().collect();
        tickets.sort_by(|a, b| a.created.cmp(&b.created));
        Ok(tickets)
    }

    fn count(&self) -> Result<usize, StorageError> {
        let guard = self.tickets.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.len())
    }
}

/// Invoice source over a dataset loaded once at startup.
#[derive(Debug)]
pub struct StaticInvoiceSource {
    invoices: Vec<InvoiceRecord>,
}

impl StaticInvoiceSource {
    pub fn new(invoices: Vec<InvoiceRecord>) -> Self {
        Self { invoices }
    }
}

impl InvoiceSource for StaticInvoiceSource {
    fn invoices(&self) -> &[InvoiceRecord] {
        &self.invoices
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use invoq_core::{
        new_report_id, ActionSummary, ActionType, Sender, TicketCategory, TicketPriority,
        TicketStatus,
    };
    use invoq_core::Message;

    fn empty_action() -> Action {
        Action {
            action_type: ActionType::FilterInvoices,
            report_id: new_report_id(),
            data: Vec::new(),
            summary: ActionSummary {
                count: 0,
                total_amount: 0.0,
                avg_amount: 0.0,
                vendors: Vec::new(),
                statuses: Default::default(),
                issues: Vec::new(),
            },
            analysis: None,
            timestamp: Utc::now(),
            downloadable: true,
            filters: None,
        }
    }

    fn ticket(id: &str, session_id: &str) -> Ticket {
        let now = Utc::now();
        Ticket {
            id: id.to_string(),
            description: "General support request".to_string(),
            priority: TicketPriority::Medium,
            status: TicketStatus::Open,
            category: TicketCategory::General,
            session_id: session_id.to_string(),
            related_actions: Vec::new(),
            created: now,
            last_updated: now,
            assignee: None,
            updates: Vec::new(),
            estimated_resolution: now,
            resolution: None,
            escalation_reason: None,
        }
    }

    #[test]
    fn test_get_or_create_is_idempotent() {
        let store = InMemoryConversationStore::new();
        let first = store.get_or_create("s1").unwrap();
        assert!(first.messages.is_empty());

        let mut updated = first.clone();
        updated.messages.push(Message::new(Sender::User, "hello"));
        store.put(updated).unwrap();

        let second = store.get_or_create("s1").unwrap();
        assert_eq!(second.messages.len(), 1);
    }

    #[test]
    fn test_find_action_across_sessions() {
        let store = InMemoryConversationStore::new();
        let action = empty_action();
        let report_id = action.report_id;

        let mut convo = store.get_or_create("s1").unwrap();
        convo.actions.push(action);
        store.put(convo).unwrap();
        store.get_or_create("s2").unwrap();

        assert!(store.find_action(report_id).unwrap().is_some());
        assert!(store.find_action(new_report_id()).unwrap().is_none());
    }

    #[test]
    fn test_ticket_listing_scoped_to_session() {
        let store = InMemoryTicketStore::new();
        store.put(ticket("TKT-20260823-001", "s1")).unwrap();
        store.put(ticket("TKT-20260823-002", "s2")).unwrap();
        store.put(ticket("TKT-20260823-003", "s1")).unwrap();

        assert_eq!(store.list_by_session("s1").unwrap().len(), 2);
        assert_eq!(store.list_by_session("s3").unwrap().len(), 0);
        assert_eq!(store.list_all().unwrap().len(), 3);
    }

    #[test]
    fn test_ticket_put_overwrites() {
        let store = InMemoryTicketStore::new();
        store.put(ticket("TKT-20260823-001", "s1")).unwrap();

        let mut updated = store.get("TKT-20260823-001").unwrap().unwrap();
        updated.status = TicketStatus::Resolved;
        store.put(updated).unwrap();

        let fetched = store.get("TKT-20260823-001").unwrap().unwrap();
        assert_eq!(fetched.status, TicketStatus::Resolved);
    }
}

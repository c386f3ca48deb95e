//! Store traits

use invoq_core::{Action, Conversation, InvoiceRecord, ReportId, StorageError, Ticket};

/// Per-session conversation persistence.
///
/// Conversations are read-modify-write as whole values; callers fetch,
/// append and put back.
pub trait ConversationStore: Send + Sync {
    fn get(&self, session_id: &str) -> Result<Option<Conversation>, StorageError>;

    /// Fetch the conversation for a session, creating an empty one on first
    /// contact.
    fn get_or_create(&self, session_id: &str) -> Result<Conversation, StorageError>;

    fn put(&self, conversation: Conversation) -> Result<(), StorageError>;

    /// Locate an action by report id across all conversations.
    fn find_action(&self, report_id: ReportId) -> Result<Option<Action>, StorageError>;

    /// Number of sessions seen so far.
    fn count(&self) -> Result<usize, StorageError>;
}

/// Ticket persistence keyed by human-readable ticket id.
pub trait TicketStore: Send + Sync {
    fn get(&self, ticket_id: &str) -> Result<Option<Ticket>, StorageError>;
    fn put(&self, ticket: Ticket) -> Result<(), StorageError>;
    fn list_by_session(&self, session_id: &str) -> Result<Vec<Ticket>, StorageError>;
    fn list_all(&self) -> Result<Vec<Ticket>, StorageError>;
    fn count(&self) -> Result<usize, StorageError>;
}

/// Read-only access to the invoice dataset.
pub trait InvoiceSource: Send + Sync {
    fn invoices(&self) -> &[InvoiceRecord];
}

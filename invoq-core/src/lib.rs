//! invoq Core - Entity Types
//!
//! Pure data structures shared by every other invoq crate: messages, intents,
//! invoice records, action reports, tickets and conversations, plus the error
//! taxonomy. This crate contains ONLY data types - no business logic.

mod entities;
mod enums;
mod error;
mod health;
mod identity;

pub use entities::{
    Action, ActionSummary, ChatResponse, Conversation, FailureAnalysis, Intent,
    InvoiceFilters, InvoiceRecord, Message, Ticket, TicketUpdate,
};
pub use enums::{
    ActionType, IntentType, InvoiceStatus, Sender, TicketCategory, TicketPriority, TicketStatus,
    Timeframe,
};
pub use error::{EngineError, InvoqError, InvoqResult, LlmError, StorageError, TicketError};
pub use health::LlmHealth;
pub use identity::{new_report_id, MessageId, ReportId, Timestamp};

//! invoq Storage - Stores and Dataset
//!
//! Store traits for conversations, tickets and the invoice dataset, with
//! RwLock-backed in-memory implementations. The pipeline and API are written
//! against the traits; the in-memory backends are the only implementations
//! this deployment needs.

mod dataset;
mod memory;
mod traits;

pub use dataset::{generate_invoices, generate_invoices_seeded, DATASET_SIZE};
pub use memory::{InMemoryConversationStore, InMemoryTicketStore, StaticInvoiceSource};
pub use traits::{ConversationStore, InvoiceSource, TicketStore};

//! invoq Tickets - Ticket Lifecycle
//!
//! Creates and mutates support tickets against a caller-supplied store.
//! Tickets move `open -> {resolved, escalated}` and the terminal states have
//! no outgoing transitions. Categorization and resolution estimates are
//! derived from the ticket description at creation time.

mod lifecycle;
mod template;

pub use lifecycle::{
    categorize, create, create_at, escalate, estimate_resolution_at, generate_ticket_id, resolve,
    update,
};
pub use template::{template_for, TicketTemplate};

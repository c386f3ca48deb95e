//! Ticket creation and state transitions

use chrono::{Duration, Utc};
use invoq_core::{
    InvoqError, InvoqResult, ReportId, Ticket, TicketCategory, TicketError, TicketPriority,
    TicketStatus, TicketUpdate, Timestamp,
};
use invoq_storage::TicketStore;
use rand::Rng;

/// Create a ticket and persist it. Status starts at `open`.
pub fn create(
    store: &dyn TicketStore,
    description: impl Into<String>,
    priority: TicketPriority,
    session_id: impl Into<String>,
    related_actions: Vec<ReportId>,
) -> InvoqResult<Ticket> {
    create_at(
        store,
        description,
        priority,
        session_id,
        related_actions,
        Utc::now(),
    )
}

/// Clock-injected variant of [`create`].
pub fn create_at(
    store: &dyn TicketStore,
    description: impl Into<String>,
    priority: TicketPriority,
    session_id: impl Into<String>,
    related_actions: Vec<ReportId>,
    now: Timestamp,
) -> InvoqResult<Ticket> {
    let description = description.into();
    let ticket = Ticket {
        id: generate_ticket_id(now),
        category: categorize(&description),
        estimated_resolution: estimate_resolution_at(priority, &description, now),
        description,
        priority,
        status: TicketStatus::Open,
        session_id: session_id.into(),
        related_actions,
        created: now,
        last_updated: now,
        assignee: None,
        updates: Vec::new(),
        resolution: None,
        escalation_reason: None,
    };

    tracing::info!(
        ticket_id = %ticket.id,
        category = %ticket.category,
        priority = ?ticket.priority,
        "ticket created"
    );
    store.put(ticket.clone())?;
    Ok(ticket)
}

/// `TKT-` + creation date + random three-digit disambiguator.
pub fn generate_ticket_id(now: Timestamp) -> String {
    let disambiguator: u32 = rand::thread_rng().gen_range(0..1000);
    format!("TKT-{}-{:03}", now.format("%Y%m%d"), disambiguator)
}

/// Derive a category from the description, first keyword match wins.
pub fn categorize(description: &str) -> TicketCategory {
    let lower = description.to_lowercase();

    if lower.contains("invoice") || lower.contains("billing") {
        TicketCategory::Billing
    } else if lower.contains("gstin") || lower.contains("tax") {
        TicketCategory::Compliance
    } else if lower.contains("payment") || lower.contains("transaction") {
        TicketCategory::Payment
    } else if lower.contains("technical") || lower.contains("system") {
        TicketCategory::Technical
    } else {
        TicketCategory::General
    }
}

/// Expected resolution time from the priority's base-days table.
///
/// Compliance-flavored descriptions get a 1.5x allowance, rounded up to
/// whole days, to cover regulatory turnaround.
pub fn estimate_resolution_at(
    priority: TicketPriority,
    description: &str,
    now: Timestamp,
) -> Timestamp {
    let days = priority.base_days();
    let lower = description.to_lowercase();

    if lower.contains("gstin") || lower.contains("compliance") {
        now + Duration::days((days * 1.5).ceil() as i64)
    } else {
        now + Duration::hours((days * 24.0) as i64)
    }
}

/// Append a timestamped progress note; status is untouched.
pub fn update(store: &dyn TicketStore, ticket_id: &str, note: impl Into<String>) -> InvoqResult<Ticket> {
    let mut ticket = fetch(store, ticket_id)?;
    let now = Utc::now();
    ticket.updates.push(TicketUpdate {
        timestamp: now,
        message: note.into(),
    });
    ticket.last_updated = now;
    store.put(ticket.clone())?;
    Ok(ticket)
}

/// Move the ticket to the terminal `resolved` state.
pub fn resolve(
    store: &dyn TicketStore,
    ticket_id: &str,
    resolution: impl Into<String>,
) -> InvoqResult<Ticket> {
    let mut ticket = fetch(store, ticket_id)?;
    let now = Utc::now();
    ticket.status = TicketStatus::Resolved;
    ticket.resolution = Some(resolution.into());
    ticket.last_updated = now;
    tracing::info!(ticket_id = %ticket.id, "ticket resolved");
    store.put(ticket.clone())?;
    Ok(ticket)
}

/// Move the ticket to the terminal `escalated` state, forcing priority high.
pub fn escalate(
    store: &dyn TicketStore,
    ticket_id: &str,
    reason: impl Into<String>,
) -> InvoqResult<Ticket> {
    let mut ticket = fetch(store, ticket_id)?;
    let now = Utc::now();
    ticket.status = TicketStatus::Escalated;
    ticket.priority = TicketPriority::High;
    ticket.escalation_reason = Some(reason.into());
    ticket.last_updated = now;
    tracing::warn!(ticket_id = %ticket.id, "ticket escalated");
    store.put(ticket.clone())?;
    Ok(ticket)
}

fn fetch(store: &dyn TicketStore, ticket_id: &str) -> InvoqResult<Ticket> {
    store.get(ticket_id)?.ok_or_else(|| {
        InvoqError::Ticket(TicketError::NotFound {
            id: ticket_id.to_string(),
        })
    })
}

// =============================================================================
// TESTS
// =============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Categorization is total and consistent with its keyword table.
        #[test]
        fn prop_categorize_total(description in ".{0,120}") {
            let a = categorize(&description);
            let b = categorize(&description);
            prop_assert_eq!(a, b);
        }

        /// The compliance allowance never shortens an estimate.
        #[test]
        fn prop_compliance_never_shortens(
            priority in prop::sample::select(vec![
                TicketPriority::Low,
                TicketPriority::Medium,
                TicketPriority::High,
                TicketPriority::Critical,
            ]),
        ) {
            let start = Utc::now();
            let plain = estimate_resolution_at(priority, "general question", start);
            let compliance = estimate_resolution_at(priority, "gstin question", start);
            prop_assert!(compliance >= plain);
        }
    }
}

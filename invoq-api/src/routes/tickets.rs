//! Ticket listing and transition endpoints

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use invoq_core::{Ticket, TicketStatus};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TicketListQuery {
    pub session_id: Option<String>,
}

pub async fn list_tickets(
    State(state): State<AppState>,
    Query(query): Query<TicketListQuery>,
) -> ApiResult<Json<Vec<Ticket>>> {
    let tickets = match &query.session_id {
        Some(session_id) => state.tickets.list_by_session(session_id)?,
        None => state.tickets.list_all()?,
    };
    Ok(Json(tickets))
}

#[derive(Debug, Deserialize)]
pub struct TicketPatch {
    pub status: Option<TicketStatus>,
    /// Progress note; doubles as resolution/escalation text on transitions.
    pub note: Option<String>,
}

/// Apply a note and/or a state transition to a ticket.
pub async fn patch_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
    Json(patch): Json<TicketPatch>,
) -> ApiResult<Json<Ticket>> {
    let store = state.tickets.as_ref();

    let ticket = match patch.status {
        Some(TicketStatus::Resolved) => invoq_tickets::resolve(
            store,
            &ticket_id,
            patch.note.unwrap_or_else(|| "Resolved".to_string()),
        )?,
        Some(TicketStatus::Escalated) => invoq_tickets::escalate(
            store,
            &ticket_id,
            patch.note.unwrap_or_else(|| "Escalated".to_string()),
        )?,
        _ => match patch.note {
            Some(note) => invoq_tickets::update(store, &ticket_id, note)?,
            None => invoq_tickets::update(store, &ticket_id, "Ticket reviewed")?,
        },
    };

    Ok(Json(ticket))
}

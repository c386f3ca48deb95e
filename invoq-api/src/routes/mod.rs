//! Route modules and router assembly

mod actions;
mod chat;
mod conversations;
mod health;
mod reports;
mod tickets;

use crate::state::AppState;
use axum::routing::{get, patch, post};
use axum::Router;

/// Assemble the full API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::post_chat))
        .route(
            "/api/conversations/:session_id",
            get(conversations::get_conversation),
        )
        .route("/api/tickets", get(tickets::list_tickets))
        .route("/api/tickets/:ticket_id", patch(tickets::patch_ticket))
        .route(
            "/api/reports/:report_id/download",
            get(reports::download_report),
        )
        .route("/api/actions/execute", post(actions::execute_action))
        .route("/api/health", get(health::health))
        .route("/api/llm/health", get(health::llm_health))
        .with_state(state)
}

//! Health probe endpoints

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::Utc;
use invoq_core::{LlmHealth, Timestamp};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: Timestamp,
    pub conversations: usize,
    pub tickets: usize,
}

pub async fn health(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
        conversations: state.conversations.count()?,
        tickets: state.tickets.count()?,
    }))
}

pub async fn llm_health(State(state): State<AppState>) -> Json<LlmHealth> {
    Json(state.gateway.health().await)
}

//! Conversation history endpoint

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use invoq_core::Conversation;

/// Fetch a session's conversation; unknown sessions get an empty one.
pub async fn get_conversation(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<Conversation>> {
    let conversation = state
        .conversations
        .get(&session_id)?
        .unwrap_or_else(|| Conversation::new(&session_id));
    Ok(Json(conversation))
}

//! Direct action execution endpoint

use crate::error::ApiResult;
use crate::state::AppState;
use axum::{extract::State, Json};
use invoq_core::{Action, InvoiceFilters, InvoqError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    pub action: String,
    #[serde(default)]
    pub parameters: InvoiceFilters,
}

pub async fn execute_action(
    State(state): State<AppState>,
    Json(request): Json<ExecuteRequest>,
) -> ApiResult<Json<Action>> {
    let action = invoq_engine::execute(
        &request.action,
        &request.parameters,
        state.invoices.invoices(),
    )
    .map_err(InvoqError::from)?;
    Ok(Json(action))
}

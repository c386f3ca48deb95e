//! CSV report download endpoint

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use uuid::Uuid;

pub async fn download_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id: Uuid = report_id
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid report id"))?;

    let action = state
        .conversations
        .find_action(id)?
        .ok_or_else(|| ApiError::not_found("Report not found"))?;

    let csv = invoq_engine::render_csv(&action.data);
    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"report_{report_id}.csv\""),
        ),
    ];
    Ok((headers, csv))
}

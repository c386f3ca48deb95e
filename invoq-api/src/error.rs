//! API error responses
//!
//! Domain errors are mapped to HTTP status codes here; everything not
//! explicitly mapped becomes a generic 500 so internals never leak to
//! clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use invoq_core::{EngineError, InvoqError, StorageError, TicketError};
use serde::Serialize;

/// An error ready to be rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

impl From<InvoqError> for ApiError {
    fn from(err: InvoqError) -> Self {
        match &err {
            InvoqError::Engine(EngineError::UnknownAction { .. }) => {
                ApiError::bad_request(err.to_string())
            }
            InvoqError::Ticket(TicketError::NotFound { .. }) => {
                ApiError::not_found("Ticket not found")
            }
            InvoqError::Storage(StorageError::ReportNotFound { .. }) => {
                ApiError::not_found("Report not found")
            }
            _ => {
                tracing::error!(error = %err, "request failed");
                ApiError::internal()
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::from(InvoqError::from(err))
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action_maps_to_bad_request() {
        let err = ApiError::from(InvoqError::from(EngineError::UnknownAction {
            action_type: "x".to_string(),
        }));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ticket_not_found_maps_to_404() {
        let err = ApiError::from(InvoqError::from(TicketError::NotFound {
            id: "TKT-1".to_string(),
        }));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_lock_poisoned_maps_to_500_without_detail() {
        let err = ApiError::from(StorageError::LockPoisoned);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal server error");
    }
}

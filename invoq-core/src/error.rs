//! Error types for invoq operations

use thiserror::Error;

/// Action execution errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown action type: {action_type}")]
    UnknownAction { action_type: String },
}

/// Model gateway errors.
///
/// These are recorded at the gateway boundary but never surfaced to intent
/// resolution callers; any of them downgrades resolution to the heuristic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    #[error("External model is disabled")]
    Disabled,

    #[error("Rate limit budget exhausted, request rejected")]
    RateLimited,

    #[error("Request to {provider} timed out after {timeout_ms}ms")]
    Timeout { provider: String, timeout_ms: u64 },

    #[error("Request to {provider} failed with status {status}: {message}")]
    RequestFailed {
        provider: String,
        status: i32,
        message: String,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Ticket lifecycle errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TicketError {
    #[error("Ticket not found: {id}")]
    NotFound { id: String },
}

/// Storage layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage lock poisoned")]
    LockPoisoned,

    #[error("Report not found: {report_id}")]
    ReportNotFound { report_id: String },
}

/// Master error type for all invoq errors.
#[derive(Debug, Clone, Error)]
pub enum InvoqError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Ticket error: {0}")]
    Ticket(#[from] TicketError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for invoq operations.
pub type InvoqResult<T> = Result<T, InvoqError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display_unknown_action() {
        let err = EngineError::UnknownAction {
            action_type: "delete_invoices".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Unknown action type"));
        assert!(msg.contains("delete_invoices"));
    }

    #[test]
    fn test_llm_error_display_timeout() {
        let err = LlmError::Timeout {
            provider: "ollama".to_string(),
            timeout_ms: 15000,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("ollama"));
        assert!(msg.contains("15000"));
    }

    #[test]
    fn test_ticket_error_display_not_found() {
        let err = TicketError::NotFound {
            id: "TKT-20260801-123".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Ticket not found"));
        assert!(msg.contains("TKT-20260801-123"));
    }

    #[test]
    fn test_invoq_error_from_variants() {
        let engine = InvoqError::from(EngineError::UnknownAction {
            action_type: "x".to_string(),
        });
        assert!(matches!(engine, InvoqError::Engine(_)));

        let llm = InvoqError::from(LlmError::RateLimited);
        assert!(matches!(llm, InvoqError::Llm(_)));

        let ticket = InvoqError::from(TicketError::NotFound {
            id: "t".to_string(),
        });
        assert!(matches!(ticket, InvoqError::Ticket(_)));

        let storage = InvoqError::from(StorageError::LockPoisoned);
        assert!(matches!(storage, InvoqError::Storage(_)));
    }
}

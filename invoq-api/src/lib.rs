//! invoq API - HTTP Surface
//!
//! Axum router over the chat pipeline, stores and the model gateway:
//! - `POST /api/chat` - process a chat message
//! - `GET /api/conversations/{session_id}` - conversation history
//! - `GET /api/tickets` - list tickets, optionally per session
//! - `PATCH /api/tickets/{ticket_id}` - ticket transitions and notes
//! - `GET /api/reports/{report_id}/download` - CSV report download
//! - `POST /api/actions/execute` - direct action execution
//! - `GET /api/health`, `GET /api/llm/health` - health probes

mod config;
mod error;
pub mod routes;
mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;

//! invoq Pipeline - Chat Orchestration
//!
//! Drives one request/response cycle: resolve the message to an intent,
//! dispatch to the matching handler, thread results through the conversation
//! context and return `{text, actions, ticket?}`. The pipeline itself is
//! stateless between calls; everything it remembers lives in the stores it
//! is handed.

mod pipeline;
mod render;

pub use pipeline::ChatPipeline;
pub use render::format_inr;

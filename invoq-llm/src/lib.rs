//! invoq LLM - External-Model Gateway
//!
//! Wraps an external text-completion service behind a rate limiter, a fixed
//! timeout and strict JSON-shape validation. The gateway either produces a
//! typed [`Intent`] or nothing; no failure mode is ever surfaced to the
//! caller, which falls back to heuristic resolution on `None`.

mod config;
mod extract;
mod gateway;
pub mod providers;
mod rate_limit;

pub use config::{LlmConfig, ProviderKind};
pub use extract::{extract_json_block, parse_intent};
pub use gateway::{build_intent_prompt, IntentGateway};
pub use providers::{CompletionProvider, MockCompletionProvider, OllamaProvider, OpenAiProvider};
pub use rate_limit::TokenBucket;

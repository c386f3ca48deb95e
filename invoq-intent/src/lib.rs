//! invoq Intent - Intent Resolution
//!
//! Maps a raw chat message to a typed [`Intent`](invoq_core::Intent). The
//! heuristic classifier is a fixed, ordered rule list evaluated
//! first-match-wins, so classification is deterministic for any input. When a
//! model gateway is supplied it is consulted first and the heuristics serve
//! as the fallback.

mod classify;
mod resolver;
mod slots;

pub use classify::classify;
pub use resolver::IntentResolver;
pub use slots::{extract_status, extract_timeframe, extract_vendor, KNOWN_STATUSES, KNOWN_VENDORS};

//! invoq Engine - Action Execution
//!
//! Executes the three data operations over an invoice dataset:
//! `filter_invoices`, `analyze_failures` and `generate_report`. Every
//! successful execution produces an immutable [`Action`](invoq_core::Action)
//! carrying the matched records, an aggregate summary and a fresh report id.
//!
//! Grouping and summary output is deterministic for identical inputs; only
//! the report id and timestamp vary per call.

mod csv;
mod execute;

pub use csv::render_csv;
pub use execute::{analyze_failures, execute, execute_at, filter_invoices, summarize};

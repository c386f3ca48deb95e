//! Identity types for invoq entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Message identifier using UUIDv7 for timestamp-sortable IDs.
pub type MessageId = Uuid;

/// Report identifier minted once per executed action.
/// Globally unique and stable for the lifetime of the action.
pub type ReportId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Generate a new UUIDv7 report id (timestamp-sortable).
pub fn new_report_id() -> ReportId {
    Uuid::now_v7()
}

//! Core entity structures

use crate::{
    ActionType, IntentType, InvoiceStatus, MessageId, ReportId, Sender, TicketCategory,
    TicketPriority, TicketStatus, Timeframe, Timestamp,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// ============================================================================
// CONVERSATION ENTITIES
// ============================================================================

/// A single conversation message. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub timestamp: Timestamp,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Structured classification of a free-text message.
///
/// Produced fresh per message by the intent resolver; never persisted
/// independently of the message it came from. Slots stay absent when
/// extraction finds nothing, except `timeframe` which defaults to `All`
/// for filter intents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(rename = "type")]
    pub intent_type: IntentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
}

impl Intent {
    /// An intent with no extracted slots.
    pub fn bare(intent_type: IntentType) -> Self {
        Self {
            intent_type,
            vendor: None,
            status: None,
            timeframe: None,
        }
    }
}

/// One conversation per session key. Created on first message, appended to on
/// every exchange, never rewritten in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub session_id: String,
    pub messages: Vec<Message>,
    pub actions: Vec<Action>,
    pub created: Timestamp,
}

impl Conversation {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
            actions: Vec::new(),
            created: Utc::now(),
        }
    }
}

// ============================================================================
// INVOICE ENTITIES
// ============================================================================

/// A single invoice record. Owned by the dataset source; read-only to the
/// pipeline and engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: String,
    pub vendor: String,
    pub amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
    /// Invoice date in `YYYY-MM-DD` form.
    pub date: chrono::NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
    pub description: String,
    pub issues: Vec<String>,
    pub category: String,
    pub payment_method: String,
    pub reference: String,
}

/// Filter parameters for invoice queries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub timeframe: Timeframe,
}

// ============================================================================
// ACTION ENTITIES
// ============================================================================

/// Aggregate summary over a set of invoices.
///
/// Grouping containers are BTree-backed so identical inputs produce
/// identical (ordered) output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSummary {
    pub count: usize,
    pub total_amount: f64,
    pub avg_amount: f64,
    /// Distinct vendors touched, sorted.
    pub vendors: Vec<String>,
    /// Per-status invoice counts.
    pub statuses: BTreeMap<String, usize>,
    /// Distinct issue strings observed, sorted.
    pub issues: Vec<String>,
}

/// Failure pattern analysis produced by the analyze-failures action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureAnalysis {
    pub total_failed: usize,
    pub by_vendor: BTreeMap<String, usize>,
    pub by_issue: BTreeMap<String, usize>,
    /// Counts keyed by calendar month (`YYYY-MM`).
    pub by_month: BTreeMap<String, usize>,
    pub recommendations: Vec<String>,
}

/// Immutable record of one executed data operation.
///
/// Created exactly once per successful dispatch; `report_id` is the sole
/// external reference used later for downloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub report_id: ReportId,
    pub data: Vec<InvoiceRecord>,
    pub summary: ActionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<FailureAnalysis>,
    pub timestamp: Timestamp,
    pub downloadable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<InvoiceFilters>,
}

// ============================================================================
// TICKET ENTITIES
// ============================================================================

/// Timestamped progress note on a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketUpdate {
    pub timestamp: Timestamp,
    pub message: String,
}

/// A support ticket with a monotonic open -> {resolved, escalated} lifecycle.
/// Mutated only through the ticket lifecycle operations; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Human-readable id, e.g. `TKT-20260823-041`.
    pub id: String,
    pub description: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub category: TicketCategory,
    pub session_id: String,
    pub related_actions: Vec<ReportId>,
    pub created: Timestamp,
    pub last_updated: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub updates: Vec<TicketUpdate>,
    pub estimated_resolution: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_reason: Option<String>,
}

// ============================================================================
// PIPELINE OUTPUT
// ============================================================================

/// Result of one request/response cycle through the chat pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub text: String,
    pub actions: Vec<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<Ticket>,
}

impl ChatResponse {
    /// A plain text reply with no side effects.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actions: Vec::new(),
            ticket: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntentType;

    #[test]
    fn test_intent_serializes_type_field() {
        let intent = Intent::bare(IntentType::ExplainFailures);
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["type"], "explain_failures");
        assert!(json.get("vendor").is_none());
    }

    #[test]
    fn test_intent_deserializes_model_output() {
        let json = r#"{"type":"filter_invoices","vendor":"IndiSky","status":"failed","timeframe":"last_month"}"#;
        let intent: Intent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.intent_type, IntentType::FilterInvoices);
        assert_eq!(intent.vendor.as_deref(), Some("IndiSky"));
        assert_eq!(intent.timeframe, Some(Timeframe::LastMonth));
    }

    #[test]
    fn test_conversation_starts_empty() {
        let convo = Conversation::new("session-1");
        assert_eq!(convo.session_id, "session-1");
        assert!(convo.messages.is_empty());
        assert!(convo.actions.is_empty());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::new(Sender::User, "hello");
        let b = Message::new(Sender::User, "hello");
        assert_ne!(a.id, b.id);
    }
}

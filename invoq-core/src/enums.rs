//! Enum types for invoq entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CONVERSATION ENUMS
// ============================================================================

/// Who authored a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Classification of a free-text message into an action type.
///
/// The wire form is snake_case, matching both the external-model contract
/// and the heuristic classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentType {
    FilterInvoices,
    ExplainFailures,
    CreateTicket,
    DownloadReport,
    TicketStatus,
    General,
}

impl IntentType {
    /// Parse from the snake_case wire representation.
    /// Unrecognized strings are rejected, never defaulted.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "filter_invoices" => Some(IntentType::FilterInvoices),
            "explain_failures" => Some(IntentType::ExplainFailures),
            "create_ticket" => Some(IntentType::CreateTicket),
            "download_report" => Some(IntentType::DownloadReport),
            "ticket_status" => Some(IntentType::TicketStatus),
            "general" => Some(IntentType::General),
            _ => None,
        }
    }
}

/// Timeframe slot for invoice filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    LastMonth,
    ThisMonth,
    LastWeek,
    #[default]
    All,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::LastMonth => "last_month",
            Timeframe::ThisMonth => "this_month",
            Timeframe::LastWeek => "last_week",
            Timeframe::All => "all",
        }
    }
}

impl FromStr for Timeframe {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last_month" => Ok(Timeframe::LastMonth),
            "this_month" => Ok(Timeframe::ThisMonth),
            "last_week" => Ok(Timeframe::LastWeek),
            "all" => Ok(Timeframe::All),
            _ => Err(()),
        }
    }
}

// ============================================================================
// INVOICE ENUMS
// ============================================================================

/// Processing status of an invoice record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Failed,
    Processing,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Failed => "failed",
            InvoiceStatus::Processing => "processing",
        }
    }

    /// Case-insensitive parse, used when matching user-supplied status slots.
    pub fn parse_ci(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "paid" => Some(InvoiceStatus::Paid),
            "pending" => Some(InvoiceStatus::Pending),
            "failed" => Some(InvoiceStatus::Failed),
            "processing" => Some(InvoiceStatus::Processing),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ACTION ENUMS
// ============================================================================

/// Type discriminator for executed actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    FilterInvoices,
    AnalyzeFailures,
    GenerateReport,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::FilterInvoices => "filter_invoices",
            ActionType::AnalyzeFailures => "analyze_failures",
            ActionType::GenerateReport => "generate_report",
        }
    }
}

impl FromStr for ActionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filter_invoices" => Ok(ActionType::FilterInvoices),
            "analyze_failures" => Ok(ActionType::AnalyzeFailures),
            "generate_report" => Ok(ActionType::GenerateReport),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TICKET ENUMS
// ============================================================================

/// Priority of a support ticket. Drives the resolution estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    /// Base resolution estimate in days for this priority.
    pub fn base_days(&self) -> f64 {
        match self {
            TicketPriority::Low => 7.0,
            TicketPriority::Medium => 3.0,
            TicketPriority::High => 1.0,
            TicketPriority::Critical => 0.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
            TicketPriority::Critical => "critical",
        }
    }
}

impl FromStr for TicketPriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TicketPriority::Low),
            "medium" => Ok(TicketPriority::Medium),
            "high" => Ok(TicketPriority::High),
            "critical" => Ok(TicketPriority::Critical),
            _ => Err(()),
        }
    }
}

/// Lifecycle status of a support ticket.
/// Resolved and Escalated are terminal; reopening is not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Open,
    Resolved,
    Escalated,
}

impl TicketStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Escalated)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Escalated => "escalated",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a support ticket, derived from its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketCategory {
    Billing,
    Compliance,
    Payment,
    Technical,
    #[default]
    General,
}

impl TicketCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Billing => "Billing",
            TicketCategory::Compliance => "Compliance",
            TicketCategory::Payment => "Payment",
            TicketCategory::Technical => "Technical",
            TicketCategory::General => "General",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// TESTS
// =============================================================================

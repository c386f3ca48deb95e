//! invoq Test Utilities
//!
//! Centralized test infrastructure for the invoq workspace:
//! - Invoice fixture builder and canned datasets
//! - Proptest generators for invoice records
//! - Re-exported mock completion provider

pub use invoq_llm::MockCompletionProvider;

pub use invoq_core::{
    Action, ActionSummary, ChatResponse, Conversation, Intent, InvoiceFilters, InvoiceRecord,
    InvoiceStatus, Ticket, TicketPriority, TicketStatus, Timeframe,
};

use chrono::NaiveDate;
use proptest::prelude::*;

// ============================================================================
// FIXTURE BUILDER
// ============================================================================

/// Builder for invoice fixtures with sensible defaults.
#[derive(Debug, Clone)]
pub struct InvoiceBuilder {
    invoice: InvoiceRecord,
}

impl InvoiceBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            invoice: InvoiceRecord {
                id: id.into(),
                vendor: "IndiSky".to_string(),
                amount: 10_000.0,
                currency: "INR".to_string(),
                status: InvoiceStatus::Paid,
                date: NaiveDate::from_ymd_opt(2026, 8, 1).expect("valid date"),
                gstin: Some("INDISKY123456789".to_string()),
                description: "Flight booking services - IndiSky".to_string(),
                issues: Vec::new(),
                category: "Travel".to_string(),
                payment_method: "Bank Transfer".to_string(),
                reference: "REF-000001".to_string(),
            },
        }
    }

    pub fn vendor(mut self, vendor: impl Into<String>) -> Self {
        self.invoice.vendor = vendor.into();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.invoice.amount = amount;
        self
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.invoice.status = status;
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.invoice.date = date;
        self
    }

    /// Mark the invoice as failed with the missing-GSTIN issue.
    pub fn with_gstin_issue(mut self) -> Self {
        self.invoice.status = InvoiceStatus::Failed;
        self.invoice.gstin = None;
        self.invoice.issues = vec!["Missing GSTIN information".to_string()];
        self
    }

    pub fn issue(mut self, issue: impl Into<String>) -> Self {
        self.invoice.issues.push(issue.into());
        self
    }

    pub fn build(self) -> InvoiceRecord {
        self.invoice
    }
}

// ============================================================================
// CANNED DATASETS
// ============================================================================

/// Twelve IndiSky invoices: seven failed with the GSTIN issue, five paid.
pub fn indisky_gstin_dataset() -> Vec<InvoiceRecord> {
    let mut invoices = Vec::with_capacity(12);
    for i in 0..7 {
        invoices.push(
            InvoiceBuilder::new(format!("INV-F{:03}", i + 1))
                .with_gstin_issue()
                .build(),
        );
    }
    for i in 0..5 {
        invoices.push(InvoiceBuilder::new(format!("INV-P{:03}", i + 1)).build());
    }
    invoices
}

/// Mixed-vendor dataset covering all four statuses.
pub fn mixed_dataset() -> Vec<InvoiceRecord> {
    vec![
        InvoiceBuilder::new("INV-001").vendor("IndiSky").with_gstin_issue().build(),
        InvoiceBuilder::new("INV-002").vendor("AirIndia").status(InvoiceStatus::Failed).build(),
        InvoiceBuilder::new("INV-003").vendor("SpiceJet").status(InvoiceStatus::Pending).build(),
        InvoiceBuilder::new("INV-004").vendor("GoAir").status(InvoiceStatus::Processing).build(),
        InvoiceBuilder::new("INV-005").vendor("Vistara").build(),
    ]
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub fn arb_invoice_status() -> impl Strategy<Value = InvoiceStatus> {
    prop::sample::select(vec![
        InvoiceStatus::Paid,
        InvoiceStatus::Pending,
        InvoiceStatus::Failed,
        InvoiceStatus::Processing,
    ])
}

pub fn arb_invoice() -> impl Strategy<Value = InvoiceRecord> {
    (
        1usize..=999_999,
        prop::sample::select(vec!["IndiSky", "AirIndia", "SpiceJet", "GoAir", "Vistara"]),
        5_000.0..105_000.0f64,
        arb_invoice_status(),
        0u32..90,
    )
        .prop_map(|(seq, vendor, amount, status, days_back)| {
            let date = NaiveDate::from_ymd_opt(2026, 8, 23)
                .expect("valid date")
                .checked_sub_days(chrono::Days::new(days_back as u64))
                .expect("valid offset");
            InvoiceBuilder::new(format!("INV-{seq:06}"))
                .vendor(vendor)
                .amount(amount)
                .status(status)
                .date(date)
                .build()
        })
}

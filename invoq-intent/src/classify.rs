//! Ordered heuristic classification
//!
//! Each rule is its own evaluation function; `RULES` fixes the priority
//! order explicitly. Rules overlap (a message can satisfy several), so the
//! ordering is load-bearing and first match wins.

use crate::slots::{extract_status, extract_timeframe, extract_vendor};
use invoq_core::{Intent, IntentType};

/// A single classification rule over the original message and its lowercased
/// form. Returns `None` when the rule does not apply.
type Rule = fn(message: &str, lower: &str) -> Option<Intent>;

/// Rule priority order. Evaluated top to bottom, first match wins.
const RULES: [Rule; 5] = [
    filter_invoices_rule,
    explain_failures_rule,
    create_ticket_rule,
    download_report_rule,
    ticket_status_rule,
];

/// Classify a message with the fixed heuristic rule list.
///
/// Total and deterministic: any message maps to exactly one intent, and
/// messages matching no rule fall through to [`IntentType::General`].
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();
    RULES
        .iter()
        .find_map(|rule| rule(message, &lower))
        .unwrap_or_else(|| Intent::bare(IntentType::General))
}

fn filter_invoices_rule(message: &str, lower: &str) -> Option<Intent> {
    if lower.contains("filter") && lower.contains("invoice") {
        Some(Intent {
            intent_type: IntentType::FilterInvoices,
            vendor: extract_vendor(message),
            status: extract_status(message),
            timeframe: extract_timeframe(message),
        })
    } else {
        None
    }
}

fn explain_failures_rule(_message: &str, lower: &str) -> Option<Intent> {
    if lower.contains("why") && (lower.contains("fail") || lower.contains("error")) {
        Some(Intent::bare(IntentType::ExplainFailures))
    } else {
        None
    }
}

fn create_ticket_rule(_message: &str, lower: &str) -> Option<Intent> {
    if lower.contains("create") && lower.contains("ticket") {
        Some(Intent::bare(IntentType::CreateTicket))
    } else {
        None
    }
}

fn download_report_rule(_message: &str, lower: &str) -> Option<Intent> {
    if lower.contains("download") && (lower.contains("report") || lower.contains("fix")) {
        Some(Intent::bare(IntentType::DownloadReport))
    } else {
        None
    }
}

fn ticket_status_rule(_message: &str, lower: &str) -> Option<Intent> {
    if lower.contains("ticket") && (lower.contains("status") || lower.contains("update")) {
        Some(Intent::bare(IntentType::TicketStatus))
    } else {
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use invoq_core::Timeframe;

    #[test]
    fn test_filter_rule_extracts_slots() {
        let intent = classify("Filter invoices for last month, vendor=IndiSky, status=failed");
        assert_eq!(intent.intent_type, IntentType::FilterInvoices);
        assert_eq!(intent.vendor.as_deref(), Some("IndiSky"));
        assert_eq!(intent.status.as_deref(), Some("failed"));
        assert_eq!(intent.timeframe, Some(Timeframe::LastMonth));
    }

    #[test]
    fn test_filter_rule_without_slots() {
        let intent = classify("please filter my invoices");
        assert_eq!(intent.intent_type, IntentType::FilterInvoices);
        assert_eq!(intent.vendor, None);
        assert_eq!(intent.status, None);
        assert_eq!(intent.timeframe, None);
    }

    #[test]
    fn test_explain_failures_rule() {
        assert_eq!(classify("Why did these fail?").intent_type, IntentType::ExplainFailures);
        assert_eq!(
            classify("why am I seeing errors").intent_type,
            IntentType::ExplainFailures
        );
    }

    #[test]
    fn test_ticket_rules() {
        assert_eq!(
            classify("Create a support ticket").intent_type,
            IntentType::CreateTicket
        );
        assert_eq!(
            classify("any update on my ticket?").intent_type,
            IntentType::TicketStatus
        );
        assert_eq!(
            classify("What's the status of my tickets?").intent_type,
            IntentType::TicketStatus
        );
    }

    #[test]
    fn test_download_rule() {
        assert_eq!(
            classify("Download the fixed report").intent_type,
            IntentType::DownloadReport
        );
        assert_eq!(
            classify("download the fixes").intent_type,
            IntentType::DownloadReport
        );
    }

    #[test]
    fn test_rule_order_filter_beats_failures() {
        // Carries both "filter invoices" and "why fail" cues; the earlier rule wins.
        let intent = classify("filter invoices and tell me why they fail");
        assert_eq!(intent.intent_type, IntentType::FilterInvoices);
    }

    #[test]
    fn test_rule_order_create_beats_status() {
        // "create a ticket and give me a status update" satisfies rules 3 and 5.
        let intent = classify("create a ticket and give me a status update");
        assert_eq!(intent.intent_type, IntentType::CreateTicket);
    }

    #[test]
    fn test_unmatched_message_is_general() {
        assert_eq!(classify("hello there").intent_type, IntentType::General);
        assert_eq!(classify("").intent_type, IntentType::General);
    }
}

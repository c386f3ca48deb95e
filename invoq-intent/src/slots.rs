//! Slot extraction from free-text messages

use invoq_core::Timeframe;
use once_cell::sync::Lazy;
use regex::Regex;

/// Vendors recognized by case-insensitive substring match.
pub const KNOWN_VENDORS: [&str; 5] = ["IndiSky", "AirIndia", "SpiceJet", "GoAir", "Vistara"];

/// Statuses recognized by case-insensitive substring match.
pub const KNOWN_STATUSES: [&str; 4] = ["paid", "pending", "failed", "processing"];

static VENDOR_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"vendor=['"]([^'"]*)['"]"#).expect("valid regex"));
static VENDOR_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"vendor=(\w+)").expect("valid regex"));
static STATUS_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"status=['"]([^'"]*)['"]"#).expect("valid regex"));
static STATUS_BARE: Lazy<Regex> = Lazy::new(|| Regex::new(r"status=(\w+)").expect("valid regex"));

/// Extract a vendor name from the message.
///
/// Known vendors win over `vendor=` expressions, and the canonical casing is
/// returned regardless of how the message spells the vendor.
pub fn extract_vendor(message: &str) -> Option<String> {
    let lower = message.to_lowercase();
    for vendor in KNOWN_VENDORS {
        if lower.contains(&vendor.to_lowercase()) {
            return Some(vendor.to_string());
        }
    }

    VENDOR_QUOTED
        .captures(message)
        .or_else(|| VENDOR_BARE.captures(message))
        .map(|caps| caps[1].to_string())
}

/// Extract an invoice status from the message.
pub fn extract_status(message: &str) -> Option<String> {
    let lower = message.to_lowercase();
    for status in KNOWN_STATUSES {
        if lower.contains(status) {
            return Some(status.to_string());
        }
    }

    STATUS_QUOTED
        .captures(message)
        .or_else(|| STATUS_BARE.captures(message))
        .map(|caps| caps[1].to_string())
}

/// Extract a timeframe phrase from the message.
pub fn extract_timeframe(message: &str) -> Option<Timeframe> {
    let lower = message.to_lowercase();
    if lower.contains("last month") {
        Some(Timeframe::LastMonth)
    } else if lower.contains("this month") {
        Some(Timeframe::ThisMonth)
    } else if lower.contains("last week") {
        Some(Timeframe::LastWeek)
    } else {
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================

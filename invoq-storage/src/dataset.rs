//! Sample invoice dataset generation
//!
//! Generates the demo dataset the assistant operates on: invoices spread over
//! the last 90 days across five airline vendors. Failed IndiSky invoices
//! carry the missing-GSTIN issue 70% of the time, which drives the failure
//! analysis and compliance flows.

use chrono::{Days, Utc};
use invoq_core::{InvoiceRecord, InvoiceStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DATASET_SIZE: usize = 500;

const VENDORS: [&str; 5] = ["IndiSky", "AirIndia", "SpiceJet", "GoAir", "Vistara"];
const STATUSES: [InvoiceStatus; 4] = [
    InvoiceStatus::Paid,
    InvoiceStatus::Pending,
    InvoiceStatus::Failed,
    InvoiceStatus::Processing,
];
const PAYMENT_METHODS: [&str; 3] = ["Credit Card", "Bank Transfer", "UPI"];

/// Generate the sample dataset from OS entropy.
pub fn generate_invoices() -> Vec<InvoiceRecord> {
    generate_invoices_with(&mut StdRng::from_entropy())
}

/// Seeded variant for reproducible fixtures.
pub fn generate_invoices_seeded(seed: u64) -> Vec<InvoiceRecord> {
    generate_invoices_with(&mut StdRng::seed_from_u64(seed))
}

fn generate_invoices_with(rng: &mut StdRng) -> Vec<InvoiceRecord> {
    let today = Utc::now().date_naive();

    (0..DATASET_SIZE)
        .map(|i| {
            let vendor = VENDORS[rng.gen_range(0..VENDORS.len())];
            let status = STATUSES[rng.gen_range(0..STATUSES.len())];
            let amount = rng.gen_range(0..100_000) as f64 + 5_000.0;
            let date = today
                .checked_sub_days(Days::new(rng.gen_range(0..90)))
                .unwrap_or(today);

            let has_gstin_issue = vendor == "IndiSky"
                && status == InvoiceStatus::Failed
                && rng.gen_bool(0.7);

            InvoiceRecord {
                id: format!("INV-{:06}", i + 1),
                vendor: vendor.to_string(),
                amount,
                currency: "INR".to_string(),
                status,
                date,
                gstin: if has_gstin_issue {
                    None
                } else {
                    Some(format!(
                        "{}{}",
                        vendor.to_uppercase(),
                        rng.gen_range(0..1_000_000_000u64)
                    ))
                },
                description: format!("Flight booking services - {vendor}"),
                issues: if has_gstin_issue {
                    vec!["Missing GSTIN information".to_string()]
                } else {
                    Vec::new()
                },
                category: "Travel".to_string(),
                payment_method: PAYMENT_METHODS[rng.gen_range(0..PAYMENT_METHODS.len())]
                    .to_string(),
                reference: format!("REF-{}", rng.gen_range(0..1_000_000)),
            }
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let invoices = generate_invoices_seeded(7);
        assert_eq!(invoices.len(), DATASET_SIZE);
        assert_eq!(invoices[0].id, "INV-000001");
        assert!(invoices.iter().all(|i| i.currency == "INR"));
        assert!(invoices.iter().all(|i| i.amount >= 5_000.0 && i.amount < 105_000.0));
        assert!(invoices.iter().all(|i| VENDORS.contains(&i.vendor.as_str())));
    }

    #[test]
    fn test_dates_within_last_90_days() {
        let today = Utc::now().date_naive();
        let floor = today.checked_sub_days(Days::new(90)).unwrap();
        let invoices = generate_invoices_seeded(7);
        assert!(invoices.iter().all(|i| i.date >= floor && i.date <= today));
    }

    #[test]
    fn test_gstin_issue_only_on_failed_indisky() {
        let invoices = generate_invoices_seeded(7);
        for invoice in invoices.iter().filter(|i| !i.issues.is_empty()) {
            assert_eq!(invoice.vendor, "IndiSky");
            assert_eq!(invoice.status, InvoiceStatus::Failed);
            assert!(invoice.gstin.is_none());
        }
    }

    #[test]
    fn test_seed_reproducibility() {
        assert_eq!(generate_invoices_seeded(42), generate_invoices_seeded(42));
        assert_ne!(generate_invoices_seeded(42), generate_invoices_seeded(43));
    }
}

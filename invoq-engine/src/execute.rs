//! Action dispatch and the individual data operations

use chrono::{Datelike, Days, NaiveDate, Utc};
use invoq_core::{
    new_report_id, Action, ActionSummary, ActionType, EngineError, FailureAnalysis,
    InvoiceFilters, InvoiceRecord, InvoiceStatus, Timeframe, Timestamp,
};
use std::collections::{BTreeMap, BTreeSet};

const GSTIN_ISSUE: &str = "Missing GSTIN information";
const GSTIN_RECOMMENDATION: &str = "Update vendor records to include GSTIN information";

/// Dispatch an action by its wire name.
///
/// Unknown names fail with [`EngineError::UnknownAction`]; nothing else in
/// the engine fails.
pub fn execute(
    action_type: &str,
    parameters: &InvoiceFilters,
    dataset: &[InvoiceRecord],
) -> Result<Action, EngineError> {
    execute_at(action_type, parameters, dataset, Utc::now())
}

/// Clock-injected variant of [`execute`].
pub fn execute_at(
    action_type: &str,
    parameters: &InvoiceFilters,
    dataset: &[InvoiceRecord],
    now: Timestamp,
) -> Result<Action, EngineError> {
    let parsed: ActionType = action_type
        .parse()
        .map_err(|_| EngineError::UnknownAction {
            action_type: action_type.to_string(),
        })?;

    let action = match parsed {
        ActionType::FilterInvoices => filter_invoices(parameters, dataset, now),
        ActionType::AnalyzeFailures => analyze_failures(dataset, now),
        // A generated report is the filtered dataset packaged for download.
        ActionType::GenerateReport => Action {
            action_type: ActionType::GenerateReport,
            ..filter_invoices(parameters, dataset, now)
        },
    };

    tracing::debug!(
        action = %action.action_type,
        matched = action.data.len(),
        report_id = %action.report_id,
        "action executed"
    );
    Ok(action)
}

/// Filter the dataset by vendor, status and timeframe, in that order.
pub fn filter_invoices(
    filters: &InvoiceFilters,
    dataset: &[InvoiceRecord],
    now: Timestamp,
) -> Action {
    let mut matched: Vec<InvoiceRecord> = dataset.to_vec();

    if let Some(vendor) = &filters.vendor {
        let vendor = vendor.to_lowercase();
        matched.retain(|invoice| invoice.vendor.to_lowercase() == vendor);
    }

    if let Some(status) = &filters.status {
        let status = status.to_lowercase();
        matched.retain(|invoice| invoice.status.as_str() == status);
    }

    match filters.timeframe {
        Timeframe::LastMonth => {
            let (start, end) = previous_month_bounds(now.date_naive());
            matched.retain(|invoice| invoice.date >= start && invoice.date <= end);
        }
        Timeframe::ThisMonth => {
            let start = month_start(now.date_naive());
            matched.retain(|invoice| invoice.date >= start);
        }
        Timeframe::LastWeek => {
            let start = now
                .date_naive()
                .checked_sub_days(Days::new(7))
                .unwrap_or(NaiveDate::MIN);
            matched.retain(|invoice| invoice.date >= start);
        }
        Timeframe::All => {}
    }

    let summary = summarize(&matched);
    Action {
        action_type: ActionType::FilterInvoices,
        report_id: new_report_id(),
        data: matched,
        summary,
        analysis: None,
        timestamp: now,
        downloadable: true,
        filters: Some(filters.clone()),
    }
}

/// Restrict to failed invoices and group counts by vendor, issue and month.
pub fn analyze_failures(dataset: &[InvoiceRecord], now: Timestamp) -> Action {
    let failed: Vec<InvoiceRecord> = dataset
        .iter()
        .filter(|invoice| invoice.status == InvoiceStatus::Failed)
        .cloned()
        .collect();

    let mut by_vendor: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_issue: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_month: BTreeMap<String, usize> = BTreeMap::new();

    for invoice in &failed {
        *by_vendor.entry(invoice.vendor.clone()).or_default() += 1;
        for issue in &invoice.issues {
            *by_issue.entry(issue.clone()).or_default() += 1;
        }
        let month = format!("{:04}-{:02}", invoice.date.year(), invoice.date.month());
        *by_month.entry(month).or_default() += 1;
    }

    let mut recommendations = Vec::new();
    if by_issue.contains_key(GSTIN_ISSUE) {
        recommendations.push(GSTIN_RECOMMENDATION.to_string());
    }

    let summary = summarize(&failed);
    Action {
        action_type: ActionType::AnalyzeFailures,
        report_id: new_report_id(),
        analysis: Some(FailureAnalysis {
            total_failed: failed.len(),
            by_vendor,
            by_issue,
            by_month,
            recommendations,
        }),
        data: failed,
        summary,
        timestamp: now,
        downloadable: true,
        filters: None,
    }
}

/// Aggregate summary over a set of invoices.
pub fn summarize(invoices: &[InvoiceRecord]) -> ActionSummary {
    let mut total_amount = 0.0;
    let mut vendors = BTreeSet::new();
    let mut statuses: BTreeMap<String, usize> = BTreeMap::new();
    let mut issues = BTreeSet::new();

    for invoice in invoices {
        total_amount += invoice.amount;
        vendors.insert(invoice.vendor.clone());
        *statuses.entry(invoice.status.as_str().to_string()).or_default() += 1;
        for issue in &invoice.issues {
            issues.insert(issue.clone());
        }
    }

    let count = invoices.len();
    ActionSummary {
        count,
        total_amount,
        avg_amount: if count > 0 {
            total_amount / count as f64
        } else {
            0.0
        },
        vendors: vendors.into_iter().collect(),
        statuses,
        issues: issues.into_iter().collect(),
    }
}

fn month_start(today: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today)
}

/// Inclusive bounds of the calendar month before the one containing `today`.
fn previous_month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let current_start = month_start(today);
    let end = current_start.pred_opt().unwrap_or(current_start);
    (month_start(end), end)
}

// =============================================================================
// TESTS
// =============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn arb_invoice() -> impl Strategy<Value = InvoiceRecord> {
        (
            "[A-Z]{3}-[0-9]{4}",
            prop::sample::select(vec!["IndiSky", "AirIndia", "SpiceJet", "GoAir", "Vistara"]),
            5_000.0..105_000.0f64,
            prop::sample::select(vec![
                InvoiceStatus::Paid,
                InvoiceStatus::Pending,
                InvoiceStatus::Failed,
                InvoiceStatus::Processing,
            ]),
            0u64..365,
            prop::bool::ANY,
        )
            .prop_map(|(id, vendor, amount, status, days_ago, gstin_issue)| {
                let date = NaiveDate::from_ymd_opt(2026, 8, 15)
                    .unwrap()
                    .checked_sub_days(Days::new(days_ago))
                    .unwrap();
                let issues = if status == InvoiceStatus::Failed && gstin_issue {
                    vec!["Missing GSTIN information".to_string()]
                } else {
                    Vec::new()
                };
                InvoiceRecord {
                    id,
                    vendor: vendor.to_string(),
                    amount,
                    currency: "INR".to_string(),
                    status,
                    date,
                    gstin: None,
                    description: String::new(),
                    issues,
                    category: "Travel".to_string(),
                    payment_method: "UPI".to_string(),
                    reference: String::new(),
                }
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Identical dataset and parameters give bit-identical summaries and
        /// groupings; only report id and timestamp may differ.
        #[test]
        fn prop_execution_is_deterministic(
            dataset in prop::collection::vec(arb_invoice(), 0..40),
            vendor in prop::option::of(prop::sample::select(vec!["IndiSky", "indisky", "GoAir"])),
            status in prop::option::of(prop::sample::select(vec!["failed", "paid"])),
        ) {
            let now = Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap();
            let filters = InvoiceFilters {
                vendor: vendor.map(str::to_string),
                status: status.map(str::to_string),
                timeframe: Timeframe::All,
            };
            let a = execute_at("filter_invoices", &filters, &dataset, now).unwrap();
            let b = execute_at("filter_invoices", &filters, &dataset, now).unwrap();
            prop_assert_eq!(&a.data, &b.data);
            prop_assert_eq!(&a.summary, &b.summary);

            let fa = execute_at("analyze_failures", &filters, &dataset, now).unwrap();
            let fb = execute_at("analyze_failures", &filters, &dataset, now).unwrap();
            prop_assert_eq!(&fa.analysis, &fb.analysis);
        }

        /// Every record an analysis counts is actually failed, and groupings
        /// sum back to the total.
        #[test]
        fn prop_analysis_counts_consistent(dataset in prop::collection::vec(arb_invoice(), 0..40)) {
            let now = Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap();
            let action = execute_at("analyze_failures", &InvoiceFilters::default(), &dataset, now)
                .unwrap();
            let analysis = action.analysis.unwrap();
            prop_assert!(action.data.iter().all(|i| i.status == InvoiceStatus::Failed));
            prop_assert_eq!(analysis.by_vendor.values().sum::<usize>(), analysis.total_failed);
            prop_assert_eq!(analysis.by_month.values().sum::<usize>(), analysis.total_failed);
        }
    }
}

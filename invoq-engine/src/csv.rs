//! CSV rendering for downloadable reports

use invoq_core::InvoiceRecord;

const HEADERS: [&str; 12] = [
    "id",
    "vendor",
    "amount",
    "currency",
    "status",
    "date",
    "gstin",
    "description",
    "category",
    "payment_method",
    "reference",
    "issues",
];

/// Render invoice records as CSV with a fixed column set.
///
/// Issues are joined with "; " into a single trailing column. An empty
/// record set renders as a placeholder line rather than a bare header.
pub fn render_csv(records: &[InvoiceRecord]) -> String {
    if records.is_empty() {
        return "No data available".to_string();
    }

    let mut out = String::new();
    out.push_str(&HEADERS.join(","));
    out.push('\n');

    for record in records {
        let fields = [
            escape(&record.id),
            escape(&record.vendor),
            format_amount(record.amount),
            escape(&record.currency),
            escape(record.status.as_str()),
            record.date.format("%Y-%m-%d").to_string(),
            escape(record.gstin.as_deref().unwrap_or("")),
            escape(&record.description),
            escape(&record.category),
            escape(&record.payment_method),
            escape(&record.reference),
            escape(&record.issues.join("; ")),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

fn escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Per-category ticket templates

use invoq_core::TicketCategory;

/// Starter template for a ticket in a given category: a default description
/// plus the information support asks the reporter to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketTemplate {
    pub category: TicketCategory,
    pub description: &'static str,
    pub required_info: &'static [&'static str],
}

/// Template for a category.
pub fn template_for(category: TicketCategory) -> TicketTemplate {
    match category {
        TicketCategory::Billing => TicketTemplate {
            category,
            description: "Issue with invoice processing",
            required_info: &["Invoice ID", "Vendor", "Amount", "Error message"],
        },
        TicketCategory::Compliance => TicketTemplate {
            category,
            description: "Compliance or regulatory issue",
            required_info: &["Document type", "Compliance requirement", "Missing information"],
        },
        TicketCategory::Payment => TicketTemplate {
            category,
            description: "Payment processing issue",
            required_info: &["Transaction ID", "Amount", "Payment method", "Error code"],
        },
        TicketCategory::Technical => TicketTemplate {
            category,
            description: "Technical system issue",
            required_info: &["System component", "Error message", "Steps to reproduce"],
        },
        TicketCategory::General => TicketTemplate {
            category,
            description: "General support request",
            required_info: &["Description of the issue"],
        },
    }
}

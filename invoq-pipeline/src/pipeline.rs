//! Intent dispatch and response handlers

use crate::render::{format_inr, plural};
use invoq_context::ConversationContext;
use invoq_core::{
    ActionType, ChatResponse, Conversation, IntentType, InvoiceFilters, InvoiceStatus,
    InvoqResult, Sender, TicketPriority, TicketStatus, Timeframe,
};
use invoq_intent::IntentResolver;
use invoq_storage::{ConversationStore, InvoiceSource, TicketStore};
use std::collections::BTreeMap;
use std::sync::Arc;

const FILTER_FIRST_HINT: &str = "I need to filter invoices first to analyze failures. Please ask me to filter invoices with status=failed.";
const NO_REPORTS_HINT: &str = "No downloadable reports are currently available. Please filter some invoices first to generate a report.";
const GSTIN_REMARK: &str = "The most common issue appears to be missing GSTIN information, which is required for compliance with Indian tax regulations.";

/// Orchestrates one chat exchange per call.
#[derive(Clone)]
pub struct ChatPipeline {
    resolver: IntentResolver,
    conversations: Arc<dyn ConversationStore>,
    tickets: Arc<dyn TicketStore>,
    invoices: Arc<dyn InvoiceSource>,
}

impl ChatPipeline {
    pub fn new(
        resolver: IntentResolver,
        conversations: Arc<dyn ConversationStore>,
        tickets: Arc<dyn TicketStore>,
        invoices: Arc<dyn InvoiceSource>,
    ) -> Self {
        Self {
            resolver,
            conversations,
            tickets,
            invoices,
        }
    }

    /// Process one user message for a session.
    ///
    /// The user message is appended before dispatch, so referential lookups
    /// see only actions from previous turns. Produced actions and the
    /// assistant reply are appended afterwards and the conversation is
    /// persisted in one put.
    pub async fn process_message(
        &self,
        session_id: &str,
        message: &str,
    ) -> InvoqResult<ChatResponse> {
        let mut conversation = self.conversations.get_or_create(session_id)?;
        conversation.append_message(Sender::User, message);

        let intent = self.resolver.resolve(message).await;
        tracing::info!(
            session_id,
            intent = ?intent.intent_type,
            "processing chat message"
        );

        let response = match intent.intent_type {
            IntentType::FilterInvoices => self.handle_filter(&intent)?,
            IntentType::ExplainFailures => self.handle_explain_failures(&conversation),
            IntentType::CreateTicket => self.handle_create_ticket(&conversation, session_id)?,
            IntentType::DownloadReport => self.handle_download_report(&conversation),
            IntentType::TicketStatus => self.handle_ticket_status(session_id)?,
            IntentType::General => self.handle_general(message, &conversation, session_id)?,
        };

        conversation.append_message(Sender::Assistant, &response.text);
        for action in &response.actions {
            conversation.append_action(action.clone());
        }
        self.conversations.put(conversation)?;

        Ok(response)
    }

    fn handle_filter(&self, intent: &invoq_core::Intent) -> InvoqResult<ChatResponse> {
        let filters = InvoiceFilters {
            vendor: intent.vendor.clone(),
            status: intent.status.clone(),
            timeframe: intent.timeframe.unwrap_or_default(),
        };

        let action = invoq_engine::execute(
            ActionType::FilterInvoices.as_str(),
            &filters,
            self.invoices.invoices(),
        )?;

        let mut text = format!("Found {} invoices", action.data.len());
        if let Some(vendor) = &filters.vendor {
            text.push_str(&format!(" from {vendor}"));
        }
        if let Some(status) = &filters.status {
            text.push_str(&format!(" with status \"{status}\""));
        }
        if filters.timeframe == Timeframe::LastMonth {
            text.push_str(" from last month");
        }

        text.push_str(".\n\nSummary:\n");
        text.push_str(&format!(
            "• Total Amount: ₹{}\n",
            format_inr(action.summary.total_amount)
        ));
        text.push_str(&format!(
            "• Average: ₹{}\n",
            format_inr(action.summary.avg_amount)
        ));

        if !action.summary.issues.is_empty() {
            text.push_str("\n⚠️ Issues found:\n");
            for issue in &action.summary.issues {
                text.push_str(&format!("• {issue}\n"));
            }
        }

        Ok(ChatResponse {
            text,
            actions: vec![action],
            ticket: None,
        })
    }

    fn handle_explain_failures(&self, conversation: &Conversation) -> ChatResponse {
        let Some(filter_action) = conversation.last_action_of_type(ActionType::FilterInvoices)
        else {
            return ChatResponse::text_only(FILTER_FIRST_HINT);
        };

        let failed: Vec<_> = filter_action
            .data
            .iter()
            .filter(|invoice| invoice.status == InvoiceStatus::Failed)
            .collect();

        if failed.is_empty() {
            return ChatResponse::text_only("No failed invoices found in the last filter results.");
        }

        let mut issue_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for invoice in &failed {
            for issue in &invoice.issues {
                *issue_counts.entry(issue.as_str()).or_default() += 1;
            }
        }

        let mut text = format!("Analysis of {} failed invoices:\n\n", failed.len());
        if issue_counts.is_empty() {
            text.push_str(
                "No specific issues were identified in the failed invoices. This might require manual investigation.",
            );
        } else {
            text.push_str("Issues identified:\n");
            for (issue, count) in &issue_counts {
                text.push_str(&format!("• {issue}: {count} invoice{}\n", plural(*count)));
            }
            text.push('\n');
            text.push_str(GSTIN_REMARK);
        }

        ChatResponse::text_only(text)
    }

    fn handle_create_ticket(
        &self,
        conversation: &Conversation,
        session_id: &str,
    ) -> InvoqResult<ChatResponse> {
        let recent = conversation.recent_actions(3);

        let mut description = "General support request".to_string();
        let mut priority = TicketPriority::Medium;

        let last_filter = recent
            .iter()
            .find(|action| action.action_type == ActionType::FilterInvoices);
        if let Some(action) = last_filter {
            if !action.summary.issues.is_empty() {
                description = format!(
                    "Issue with invoices: {}",
                    action.summary.issues.join(", ")
                );
                priority = TicketPriority::High;
            }
        }

        let related: Vec<_> = recent.iter().map(|action| action.report_id).collect();
        let ticket = invoq_tickets::create(
            self.tickets.as_ref(),
            description,
            priority,
            session_id,
            related,
        )?;

        let text = format!(
            "I've created support ticket {} for you. The ticket has been assigned priority \"{}\" and our support team will investigate the issue.\n\nI'll notify you as soon as there are any updates. You can also check the ticket status in the sidebar.",
            ticket.id,
            priority.as_str()
        );

        Ok(ChatResponse {
            text,
            actions: Vec::new(),
            ticket: Some(ticket),
        })
    }

    fn handle_download_report(&self, conversation: &Conversation) -> ChatResponse {
        let Some(action) = conversation.last_downloadable_action() else {
            return ChatResponse::text_only(NO_REPORTS_HINT);
        };

        ChatResponse::text_only(format!(
            "The latest report ({}) is ready for download. You can find the download button in the Recent Actions panel on the right side of the screen.\n\nReport ID: {}\nGenerated: {}",
            action.action_type,
            action.report_id,
            action.timestamp.format("%b %d, %Y %H:%M")
        ))
    }

    fn handle_ticket_status(&self, session_id: &str) -> InvoqResult<ChatResponse> {
        let tickets = self.tickets.list_by_session(session_id)?;
        if tickets.is_empty() {
            return Ok(ChatResponse::text_only(
                "You don't have any support tickets yet.",
            ));
        }

        let mut text = format!(
            "You have {} support ticket{}:\n\n",
            tickets.len(),
            plural(tickets.len())
        );
        for ticket in &tickets {
            text.push_str(&format!("• {}: {}\n", ticket.id, ticket.status));
            text.push_str(&format!(
                "  Created: {}\n",
                ticket.created.format("%b %d, %Y")
            ));
            if let Some(last_update) = ticket.updates.last() {
                text.push_str(&format!("  Last update: {}\n", last_update.message));
            }
            text.push('\n');
        }

        Ok(ChatResponse::text_only(text))
    }

    fn handle_general(
        &self,
        message: &str,
        conversation: &Conversation,
        session_id: &str,
    ) -> InvoqResult<ChatResponse> {
        let lower = message.to_lowercase();

        if lower.contains("hello") || lower.contains("hi") {
            let mut greeting = String::from(
                "Hello! I'm your unified in-app assistant. I can help you with:\n\n\
                 • Filtering and analyzing invoices\n\
                 • Creating and tracking support tickets\n\
                 • Downloading reports\n\
                 • Explaining issues and providing insights\n\n",
            );
            if conversation.messages.len() > 2 {
                greeting.push_str(
                    "I can see we've been chatting before. Feel free to continue where we left off!",
                );
            } else {
                greeting.push_str(
                    "Try asking me to 'Filter invoices for last month, vendor=IndiSky, status=failed' to get started.",
                );
            }
            return Ok(ChatResponse::text_only(greeting));
        }

        let mut text =
            String::from("I'm here to help you with invoice management and support tickets. ");
        if !conversation.messages.is_empty() {
            text.push_str(
                "Based on our conversation, I can help you continue with your previous tasks or start something new. ",
            );
        }

        let open_tickets = self
            .tickets
            .list_by_session(session_id)?
            .iter()
            .filter(|ticket| ticket.status == TicketStatus::Open)
            .count();
        if open_tickets > 0 {
            text.push_str(&format!(
                "You have {open_tickets} open support ticket{} that I'm tracking. ",
                plural(open_tickets)
            ));
        }

        text.push_str("\n\nWhat would you like to do next?");
        Ok(ChatResponse::text_only(text))
    }
}

impl std::fmt::Debug for ChatPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatPipeline").finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================

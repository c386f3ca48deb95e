//! invoq Context - Conversation Context
//!
//! Append-only view over a [`Conversation`]: messages and actions are pushed
//! in arrival order and never deleted or reordered. Referential phrases like
//! "the report" or "these failures" resolve by scanning the action history
//! from the end.

use invoq_core::{Action, ActionType, Conversation, Message, Sender};

/// Append-only mutation and lookup operations over a conversation.
///
/// Implemented for [`Conversation`] directly; the trait exists so pipeline
/// tests can observe context interactions through a seam.
pub trait ConversationContext {
    fn append_message(&mut self, sender: Sender, text: impl Into<String>);
    fn append_action(&mut self, action: Action);

    /// Most recent action of the given type, scanning from the end.
    fn last_action_of_type(&self, action_type: ActionType) -> Option<&Action>;

    /// Most recent downloadable action of any type.
    fn last_downloadable_action(&self) -> Option<&Action>;

    /// The most recent `n` actions, oldest first.
    fn recent_actions(&self, n: usize) -> &[Action];
}

impl ConversationContext for Conversation {
    fn append_message(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(Message::new(sender, text));
    }

    fn append_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    fn last_action_of_type(&self, action_type: ActionType) -> Option<&Action> {
        self.actions
            .iter()
            .rev()
            .find(|action| action.action_type == action_type)
    }

    fn last_downloadable_action(&self) -> Option<&Action> {
        self.actions.iter().rev().find(|action| action.downloadable)
    }

    fn recent_actions(&self, n: usize) -> &[Action] {
        let start = self.actions.len().saturating_sub(n);
        &self.actions[start..]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use invoq_core::{new_report_id, ActionSummary};

    fn action(action_type: ActionType, downloadable: bool) -> Action {
        Action {
            action_type,
            report_id: new_report_id(),
            data: Vec::new(),
            summary: ActionSummary {
                count: 0,
                total_amount: 0.0,
                avg_amount: 0.0,
                vendors: Vec::new(),
                statuses: Default::default(),
                issues: Vec::new(),
            },
            analysis: None,
            timestamp: Utc::now(),
            downloadable,
            filters: None,
        }
    }

    #[test]
    fn test_messages_preserve_arrival_order() {
        let mut convo = Conversation::new("s1");
        convo.append_message(Sender::User, "first");
        convo.append_message(Sender::Assistant, "second");
        convo.append_message(Sender::User, "third");

        let texts: Vec<&str> = convo.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_last_action_of_type_scans_from_end() {
        let mut convo = Conversation::new("s1");
        let first = action(ActionType::FilterInvoices, true);
        let second = action(ActionType::AnalyzeFailures, true);
        let third = action(ActionType::FilterInvoices, true);
        let third_id = third.report_id;

        convo.append_action(first);
        convo.append_action(second);
        convo.append_action(third);

        let found = convo.last_action_of_type(ActionType::FilterInvoices).unwrap();
        assert_eq!(found.report_id, third_id);
        assert!(convo.last_action_of_type(ActionType::GenerateReport).is_none());
    }

    #[test]
    fn test_last_downloadable_action() {
        let mut convo = Conversation::new("s1");
        assert!(convo.last_downloadable_action().is_none());

        let not_downloadable = action(ActionType::FilterInvoices, false);
        let downloadable = action(ActionType::AnalyzeFailures, true);
        let wanted = downloadable.report_id;

        convo.append_action(downloadable);
        convo.append_action(not_downloadable);

        assert_eq!(convo.last_downloadable_action().unwrap().report_id, wanted);
    }

    #[test]
    fn test_recent_actions_window() {
        let mut convo = Conversation::new("s1");
        for _ in 0..5 {
            convo.append_action(action(ActionType::FilterInvoices, true));
        }
        assert_eq!(convo.recent_actions(3).len(), 3);
        assert_eq!(convo.recent_actions(10).len(), 5);
        let last = convo.actions.last().unwrap().report_id;
        assert_eq!(convo.recent_actions(1)[0].report_id, last);
    }
}

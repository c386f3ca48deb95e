//! Defensive JSON extraction from free-text model output
//!
//! Model responses are free text that usually, but not always, contains a
//! JSON object. The only recovery attempted is locating the first balanced
//! `{...}` block; anything else yields nothing.

use invoq_core::{Intent, IntentType, Timeframe};
use serde_json::Value;

/// Find the first balanced `{...}` block in `text`.
pub fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse model output into an [`Intent`].
///
/// Accepts only a JSON object carrying a recognized `type`; slot values that
/// fail to parse are dropped rather than rejecting the whole intent.
pub fn parse_intent(text: &str) -> Option<Intent> {
    let block = extract_json_block(text)?;
    let value: Value = serde_json::from_str(block).ok()?;
    let obj = value.as_object()?;

    let intent_type = IntentType::from_wire(obj.get("type")?.as_str()?)?;

    let vendor = obj
        .get("vendor")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let status = obj
        .get("status")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    let timeframe = obj
        .get("timeframe")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Timeframe>().ok());

    Some(Intent {
        intent_type,
        vendor,
        status,
        timeframe,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_object() {
        assert_eq!(extract_json_block(r#"{"a":1}"#), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_extract_skips_leading_prose() {
        let text = "Sure! Here is the intent:\n{\"type\":\"general\"}\nHope that helps.";
        assert_eq!(extract_json_block(text), Some("{\"type\":\"general\"}"));
    }

    #[test]
    fn test_extract_handles_nested_braces() {
        let text = r#"prefix {"a":{"b":2}} suffix {"c":3}"#;
        assert_eq!(extract_json_block(text), Some(r#"{"a":{"b":2}}"#));
    }

    #[test]
    fn test_extract_none_without_braces() {
        assert_eq!(extract_json_block("no json here"), None);
        assert_eq!(extract_json_block("unbalanced { oops"), None);
    }

    #[test]
    fn test_parse_intent_full() {
        let intent = parse_intent(
            r#"{"type":"filter_invoices","vendor":"IndiSky","status":"failed","timeframe":"last_month"}"#,
        )
        .unwrap();
        assert_eq!(intent.intent_type, IntentType::FilterInvoices);
        assert_eq!(intent.vendor.as_deref(), Some("IndiSky"));
        assert_eq!(intent.status.as_deref(), Some("failed"));
        assert_eq!(intent.timeframe, Some(Timeframe::LastMonth));
    }

    #[test]
    fn test_parse_intent_rejects_unknown_type() {
        assert!(parse_intent(r#"{"type":"make_coffee"}"#).is_none());
        assert!(parse_intent(r#"{"vendor":"IndiSky"}"#).is_none());
    }

    #[test]
    fn test_parse_intent_rejects_non_object() {
        assert!(parse_intent(r#"["filter_invoices"]"#).is_none());
        assert!(parse_intent("nothing to see").is_none());
    }

    #[test]
    fn test_parse_intent_drops_bad_slots() {
        let intent =
            parse_intent(r#"{"type":"filter_invoices","timeframe":"whenever","vendor":""}"#)
                .unwrap();
        assert_eq!(intent.intent_type, IntentType::FilterInvoices);
        assert_eq!(intent.vendor, None);
        assert_eq!(intent.timeframe, None);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Extraction never panics and any extracted block is brace-balanced.
        #[test]
        fn prop_extracted_block_is_balanced(text in ".{0,200}") {
            if let Some(block) = extract_json_block(&text) {
                prop_assert!(block.starts_with('{'), "block must start with an opening brace");
                prop_assert!(block.ends_with('}'), "block must end with a closing brace");
                let mut depth = 0i64;
                for ch in block.chars() {
                    if ch == '{' { depth += 1; }
                    if ch == '}' { depth -= 1; }
                    prop_assert!(depth >= 0);
                }
                prop_assert_eq!(depth, 0);
            }
        }
    }
}

//! Mock completion provider for tests

use super::CompletionProvider;
use async_trait::async_trait;
use invoq_core::{InvoqResult, LlmError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Scripted provider that replays canned responses and counts calls.
///
/// When the script runs out the last response repeats. An empty script makes
/// every call fail, which exercises the degradation paths.
#[derive(Debug, Default)]
pub struct MockCompletionProvider {
    responses: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockCompletionProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
        }
    }

    /// Provider that always returns the same response text.
    pub fn always(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    /// Provider whose every call fails.
    pub fn failing() -> Self {
        Self::new(Vec::new())
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, _prompt: &str) -> InvoqResult<String> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        let responses = self.responses.lock().unwrap();
        match responses.get(index).or_else(|| responses.last()) {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed {
                provider: "mock".to_string(),
                status: 0,
                message: "scripted failure".to_string(),
            }
            .into()),
        }
    }

    async fn probe(&self) -> InvoqResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_replays_and_repeats_last() {
        let provider = MockCompletionProvider::new(vec!["a".into(), "b".into()]);
        assert_eq!(provider.complete("x").await.unwrap(), "a");
        assert_eq!(provider.complete("x").await.unwrap(), "b");
        assert_eq!(provider.complete("x").await.unwrap(), "b");
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let provider = MockCompletionProvider::failing();
        assert!(provider.complete("x").await.is_err());
        assert_eq!(provider.call_count(), 1);
    }
}

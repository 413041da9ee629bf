/*!
 * Mock translator implementations for testing.
 *
 * This module provides mock translators that simulate different behaviors:
 * - `MockTranslator::working()` - Always succeeds with translated text
 * - `MockTranslator::intermittent(n)` - Fails every nth request
 * - `MockTranslator::failing()` - Always fails with a network error
 * - `MockTranslator::malformed()` - Always fails with a service error
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::errors::TranslatorError;
use crate::language::SourceLanguage;
use crate::translator::Translator;

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a translated text
    Working,
    /// Fails intermittently (every nth request)
    Intermittent { fail_every: usize },
    /// Always fails with a network error
    Failing,
    /// Always fails with a service (malformed response) error
    Malformed,
    /// Simulates a slow response before succeeding
    Slow { delay_ms: u64 },
}

/// Mock translator for exercising the session pipeline
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Every request seen, in issue order (text and source tag)
    requests: Arc<Mutex<Vec<(String, SourceLanguage)>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
    /// Custom per-request latency in milliseconds (optional)
    latency_ms: Option<fn(&str) -> u64>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
            latency_ms: None,
        }
    }

    /// Create a working mock translator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create an intermittently failing mock translator
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock translator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock translator that simulates malformed responses
    pub fn malformed() -> Self {
        Self::new(MockBehavior::Malformed)
    }

    /// Create a mock translator with a fixed response delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Set a per-request latency function, letting tests force responses
    /// to complete out of issue order
    pub fn with_latency(mut self, latency_ms: fn(&str) -> u64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }

    /// Number of requests seen so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Requests seen so far, in issue order
    pub fn requests(&self) -> Vec<(String, SourceLanguage)> {
        self.requests.lock().clone()
    }

    fn render_response(&self, text: &str) -> String {
        if let Some(generator) = self.custom_response {
            generator(text)
        } else {
            format!("[EN] {}", text)
        }
    }
}

impl Clone for MockTranslator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            requests: Arc::clone(&self.requests),
            custom_response: self.custom_response,
            latency_ms: self.latency_ms,
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, source: SourceLanguage) -> Result<String, TranslatorError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push((text.to_string(), source));

        if let Some(latency_ms) = self.latency_ms {
            tokio::time::sleep(tokio::time::Duration::from_millis(latency_ms(text))).await;
        }

        match self.behavior {
            MockBehavior::Working => Ok(self.render_response(text)),

            MockBehavior::Intermittent { fail_every } => {
                if count % fail_every == fail_every - 1 {
                    Err(TranslatorError::Network(format!(
                        "simulated intermittent failure (request #{})",
                        count + 1
                    )))
                } else {
                    Ok(self.render_response(text))
                }
            }

            MockBehavior::Failing => Err(TranslatorError::Network(
                "simulated connection failure".to_string(),
            )),

            MockBehavior::Malformed => Err(TranslatorError::Service(
                "simulated malformed response".to_string(),
            )),

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(self.render_response(text))
            }
        }
    }
}

/*!
 * Translation session state machine.
 *
 * A `TranslationSession` owns all per-session state and mediates every user
 * action: typing, switching the source language, pasting from the clipboard.
 * Each non-empty input issues a sequence-stamped request against the
 * translator; responses are reconciled against the current sequence number so
 * a stale response can never overwrite a later response or later user input,
 * regardless of network completion order.
 */

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::clipboard::ClipboardBridge;
use crate::errors::{ClipboardError, TranslatorError};
use crate::language::SourceLanguage;
use crate::translator::Translator;

/// Output shown while a request is in flight
pub const TRANSLATING_PLACEHOLDER: &str = "Translating...";

/// Output shown when the latest request failed
pub const ERROR_PLACEHOLDER: &str = "Error fetching translation";

/// Lifecycle of the displayed translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No input, nothing to translate
    Idle,
    /// A request for the current input is in flight
    Translating,
    /// The displayed text is the translation of the current input
    Ready,
    /// The latest request failed
    Failed,
}

/// Complete session state, mutated only through session operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Current input text, exactly as entered
    pub input_text: String,
    /// Selected source language
    pub source_language: SourceLanguage,
    /// Translation of the most recent request whose response has arrived
    pub display_text: String,
    /// Where the session is in the Idle/Translating/Ready/Failed lifecycle
    pub status: SessionStatus,
    /// Highest sequence number issued so far; 0 means no request yet
    pub request_sequence: u64,
}

impl SessionState {
    fn new(source_language: SourceLanguage) -> Self {
        Self {
            input_text: String::new(),
            source_language,
            display_text: String::new(),
            status: SessionStatus::Idle,
            request_sequence: 0,
        }
    }
}

struct SessionInner {
    state: Mutex<SessionState>,
    translator: Arc<dyn Translator>,
    clipboard: Mutex<Box<dyn ClipboardBridge>>,
}

/// Handle to a translation session; cheap to clone, single shared state
#[derive(Clone)]
pub struct TranslationSession {
    inner: Arc<SessionInner>,
}

impl TranslationSession {
    /// Create a session with the default source language (Korean)
    pub fn new(translator: Arc<dyn Translator>, clipboard: Box<dyn ClipboardBridge>) -> Self {
        Self::with_language(translator, clipboard, SourceLanguage::default())
    }

    /// Create a session with an explicit source language
    pub fn with_language(
        translator: Arc<dyn Translator>,
        clipboard: Box<dyn ClipboardBridge>,
        source_language: SourceLanguage,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(SessionState::new(source_language)),
                translator,
                clipboard: Mutex::new(clipboard),
            }),
        }
    }

    /// Update the input text and issue a translation request for it
    ///
    /// Empty (or whitespace-only) input short-circuits: the session goes back
    /// to `Idle` with an empty display and no request is issued. Otherwise a
    /// request stamped with a freshly incremented sequence number is spawned
    /// and its join handle returned; callers are free to detach it.
    pub fn set_input(&self, text: impl Into<String>) -> Option<JoinHandle<()>> {
        let text = text.into();
        let (sequence, source_language) = {
            let mut state = self.inner.state.lock();
            state.input_text = text.clone();
            if text.trim().is_empty() {
                state.status = SessionStatus::Idle;
                state.display_text.clear();
                return None;
            }
            state.request_sequence += 1;
            state.status = SessionStatus::Translating;
            (state.request_sequence, state.source_language)
        };
        Some(self.spawn_request(sequence, text, source_language))
    }

    /// Switch the source language and re-issue translation for the current input
    pub fn set_language(&self, tag: SourceLanguage) -> Option<JoinHandle<()>> {
        let issued = {
            let mut state = self.inner.state.lock();
            state.source_language = tag;
            if state.input_text.trim().is_empty() {
                state.status = SessionStatus::Idle;
                state.display_text.clear();
                None
            } else {
                state.request_sequence += 1;
                state.status = SessionStatus::Translating;
                Some((state.request_sequence, state.input_text.clone()))
            }
        };
        issued.map(|(sequence, text)| self.spawn_request(sequence, text, tag))
    }

    /// Pre-fill the input from the clipboard
    ///
    /// On a clipboard failure the error is returned and the session state is
    /// left completely untouched; on success this behaves exactly like
    /// `set_input` with the clipboard text.
    pub fn paste_from_clipboard(&self) -> Result<Option<JoinHandle<()>>, ClipboardError> {
        let text = self.inner.clipboard.lock().read_text()?;
        Ok(self.set_input(text))
    }

    /// Copy the current display text to the clipboard
    pub fn copy_to_clipboard(&self) -> Result<(), ClipboardError> {
        let text = self.inner.state.lock().display_text.clone();
        self.inner.clipboard.lock().write_text(&text)
    }

    /// Clear the input and the displayed translation
    pub fn clear(&self) {
        self.set_input("");
    }

    /// Consume a translator response for request `sequence`
    ///
    /// The response is discarded unless `sequence` is the highest-issued
    /// sequence number AND the session is still waiting on it; this filters
    /// both responses superseded by a newer request and responses for input
    /// that was cleared while the request was in flight.
    pub fn on_translation_result(&self, sequence: u64, result: Result<String, TranslatorError>) {
        let mut state = self.inner.state.lock();
        if sequence != state.request_sequence || state.status != SessionStatus::Translating {
            debug!(
                "discarding stale response for request #{} (current #{}, {:?})",
                sequence, state.request_sequence, state.status
            );
            return;
        }
        match result {
            Ok(translated) => {
                state.display_text = translated;
                state.status = SessionStatus::Ready;
            }
            Err(error) => {
                debug!("translation request #{} failed: {}", sequence, error);
                state.display_text.clear();
                state.status = SessionStatus::Failed;
            }
        }
    }

    /// Current status
    pub fn status(&self) -> SessionStatus {
        self.inner.state.lock().status
    }

    /// Current displayed translation (empty unless `Ready`)
    pub fn display_text(&self) -> String {
        self.inner.state.lock().display_text.clone()
    }

    /// Current input text
    pub fn input_text(&self) -> String {
        self.inner.state.lock().input_text.clone()
    }

    /// Current source language
    pub fn source_language(&self) -> SourceLanguage {
        self.inner.state.lock().source_language
    }

    /// Clone of the full session state
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.lock().clone()
    }

    /// User-facing output string: the translation when ready, a placeholder
    /// while in flight or after a failure, empty when idle
    pub fn rendered_output(&self) -> String {
        let state = self.inner.state.lock();
        match state.status {
            SessionStatus::Idle => String::new(),
            SessionStatus::Translating => TRANSLATING_PLACEHOLDER.to_string(),
            SessionStatus::Ready => state.display_text.clone(),
            SessionStatus::Failed => ERROR_PLACEHOLDER.to_string(),
        }
    }

    fn spawn_request(&self, sequence: u64, text: String, source: SourceLanguage) -> JoinHandle<()> {
        debug!(
            "issuing translation request #{} ({} chars, {})",
            sequence,
            text.chars().count(),
            source
        );
        let session = self.clone();
        tokio::spawn(async move {
            let result = session.inner.translator.translate(&text, source).await;
            session.on_translation_result(sequence, result);
        })
    }
}

/*!
 * Common test utilities for the kotran test suite
 */

use std::sync::Arc;

use kotran::clipboard::MemoryClipboard;
use kotran::session::TranslationSession;
use kotran::translator::mock::MockTranslator;

/// Creates a session driven by the given mock translator and an empty
/// in-memory clipboard
pub fn session_with(translator: MockTranslator) -> TranslationSession {
    session_with_clipboard(translator, MemoryClipboard::empty())
}

/// Creates a session driven by the given mock translator and clipboard
pub fn session_with_clipboard(
    translator: MockTranslator,
    clipboard: MemoryClipboard,
) -> TranslationSession {
    TranslationSession::new(Arc::new(translator), Box::new(clipboard))
}

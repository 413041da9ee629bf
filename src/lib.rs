/*!
 * # kotran - Korean to English translation sessions
 *
 * A Rust library (plus a small CLI) around the public Google Translate web
 * endpoint, built as an explicit session state machine.
 *
 * ## Features
 *
 * - Sequence-stamped translation requests: overlapping in-flight requests are
 *   reconciled so the displayed translation always belongs to the most
 *   recently issued request, never to whichever response happened to finish
 *   last
 * - Fixed ko->en language pair with validated source-language tags
 * - Clipboard paste/copy through a swappable bridge trait
 * - Typed error taxonomy (network, service, clipboard, language)
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `session`: Session state machine and request reconciliation
 * - `translator`: Remote translation clients:
 *   - `translator::google`: Google Translate web endpoint client
 *   - `translator::mock`: Configurable test double
 * - `clipboard`: Clipboard bridge trait and implementations
 * - `language`: Source/target language tags and validation
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod clipboard;
pub mod errors;
pub mod language;
pub mod session;
pub mod translator;

// Re-export main types for easier usage
pub use clipboard::{ClipboardBridge, MemoryClipboard, SystemClipboard};
pub use errors::{AppError, ClipboardError, LanguageError, TranslatorError};
pub use language::{SourceLanguage, TARGET_LANGUAGE};
pub use session::{SessionState, SessionStatus, TranslationSession};
pub use translator::Translator;
pub use translator::google::GoogleTranslate;

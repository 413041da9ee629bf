/*!
 * Error types for the kotran application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when calling the remote translation service
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Transport failure or timeout contacting the service
    #[error("Network error contacting translation service: {0}")]
    Network(String),

    /// Unexpected or malformed response shape from the service
    #[error("Unexpected response from translation service: {0}")]
    Service(String),
}

/// Errors that can occur when accessing the system clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The host environment denied clipboard access
    #[error("Clipboard access denied: {0}")]
    PermissionDenied(String),

    /// The clipboard has no usable text content or is not supported
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur when parsing a language tag
#[derive(Error, Debug)]
pub enum LanguageError {
    /// The tag does not name a supported source language
    #[error("Unsupported source language: {0}")]
    Unsupported(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the remote translator
    #[error("Translator error: {0}")]
    Translator(#[from] TranslatorError),

    /// Error from the clipboard bridge
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Error from language tag parsing
    #[error("Language error: {0}")]
    Language(#[from] LanguageError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

/*!
 * Translator implementations for the remote translation service.
 *
 * This module contains the common `Translator` trait plus:
 * - `google`: client for the public Google Translate web endpoint
 * - `mock`: configurable test double for session and pipeline tests
 */

use std::fmt::Debug;

use async_trait::async_trait;

use crate::errors::TranslatorError;
use crate::language::SourceLanguage;

/// Common trait for remote translators
///
/// Each call is an independent request/response pair: no retries, no caching,
/// no batching. The target language is fixed by the implementation.
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate `text` from `source` to the fixed target language
    ///
    /// # Arguments
    /// * `text` - The source text to translate
    /// * `source` - The source language tag
    ///
    /// # Returns
    /// * `Result<String, TranslatorError>` - The translated text or an error
    async fn translate(&self, text: &str, source: SourceLanguage) -> Result<String, TranslatorError>;
}

pub mod google;
pub mod mock;

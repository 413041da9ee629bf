use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::errors::TranslatorError;
use crate::language::{SourceLanguage, TARGET_LANGUAGE};
use crate::translator::Translator;

/// Public Google Translate web endpoint
const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client identifier expected by the web endpoint
const CLIENT_ID: &str = "gtx";

/// Default per-request timeout; a hung request becomes a Network error
/// instead of staying in flight forever
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Client for the public Google Translate web endpoint
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL (overridable for testing)
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a client with the default timeout
    pub fn new() -> Result<Self, TranslatorError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom per-request timeout
    ///
    /// A builder failure is propagated rather than swallowed: falling back to
    /// a client without a timeout would reintroduce the indefinite hang the
    /// timeout exists to prevent.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TranslatorError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslatorError::Network(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Override the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build the request URL for a translation
    ///
    /// Query parameters: `client` (fixed identifier), `sl` (source language),
    /// `tl` (fixed target), `dt=t` (translation mode) and the URL-encoded
    /// source text in `q`.
    pub fn request_url(&self, text: &str, source: SourceLanguage) -> Result<Url, TranslatorError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| TranslatorError::Service(format!("invalid endpoint URL: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("client", CLIENT_ID)
            .append_pair("sl", source.code())
            .append_pair("tl", TARGET_LANGUAGE)
            .append_pair("dt", "t")
            .append_pair("q", text);
        Ok(url)
    }

    /// Extract the translated text from a response body
    ///
    /// The endpoint answers with a nested array whose first element is an
    /// ordered list of `[translated_segment, original_segment, ...]` tuples;
    /// the translation is the in-order concatenation of the translated
    /// segments. Anything else is a Service error.
    pub fn concat_segments(body: &Value) -> Result<String, TranslatorError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                TranslatorError::Service("response body missing segment array".to_string())
            })?;

        let mut translated = String::new();
        for tuple in segments {
            let segment = tuple.get(0).and_then(Value::as_str).ok_or_else(|| {
                TranslatorError::Service("segment tuple missing translated text".to_string())
            })?;
            translated.push_str(segment);
        }
        Ok(translated)
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(&self, text: &str, source: SourceLanguage) -> Result<String, TranslatorError> {
        let url = self.request_url(text, source)?;
        debug!(
            "requesting translation {}->{} ({} chars)",
            source.code(),
            TARGET_LANGUAGE,
            text.chars().count()
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                TranslatorError::Network(format!("request timed out: {}", e))
            } else {
                TranslatorError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("translation endpoint error ({}): {}", status, error_text);
            return Err(TranslatorError::Service(format!(
                "endpoint returned status {}",
                status
            )));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| TranslatorError::Service(format!("invalid JSON body: {}", e)))?;

        Self::concat_segments(&body)
    }
}

/*!
 * Tests for error types and conversions
 */

use kotran::errors::{AppError, ClipboardError, LanguageError, TranslatorError};

#[test]
fn test_translatorError_network_shouldDisplayCorrectly() {
    let error = TranslatorError::Network("connection timed out".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Network error"));
    assert!(display.contains("connection timed out"));
}

#[test]
fn test_translatorError_service_shouldDisplayCorrectly() {
    let error = TranslatorError::Service("missing segment array".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Unexpected response"));
    assert!(display.contains("missing segment array"));
}

#[test]
fn test_clipboardError_permissionDenied_shouldDisplayCorrectly() {
    let error = ClipboardError::PermissionDenied("denied by host".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Clipboard access denied"));
    assert!(display.contains("denied by host"));
}

#[test]
fn test_appError_fromTranslatorError_shouldWrap() {
    let error: AppError = TranslatorError::Network("unreachable".to_string()).into();
    assert!(matches!(error, AppError::Translator(_)));
    assert!(format!("{}", error).contains("unreachable"));
}

#[test]
fn test_appError_fromClipboardError_shouldWrap() {
    let error: AppError = ClipboardError::Unavailable("no clipboard".to_string()).into();
    assert!(matches!(error, AppError::Clipboard(_)));
}

#[test]
fn test_appError_fromLanguageError_shouldWrap() {
    let error: AppError = LanguageError::Unsupported("fr".to_string()).into();
    assert!(matches!(error, AppError::Language(_)));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let error: AppError = anyhow::anyhow!("something else").into();
    assert!(matches!(error, AppError::Unknown(_)));
}

/*!
 * Tests for the clipboard bridge implementations
 */

use kotran::clipboard::{ClipboardBridge, MemoryClipboard};
use kotran::errors::ClipboardError;

#[test]
fn test_memoryClipboard_withText_shouldReadItBack() {
    let mut clipboard = MemoryClipboard::with_text("안녕");

    let text = clipboard.read_text().unwrap();
    assert_eq!(text, "안녕");
}

#[test]
fn test_memoryClipboard_writeThenRead_shouldRoundTrip() {
    let mut clipboard = MemoryClipboard::empty();

    clipboard.write_text("Hello").unwrap();
    assert_eq!(clipboard.read_text().unwrap(), "Hello");
}

#[test]
fn test_memoryClipboard_empty_shouldReturnUnavailable() {
    let mut clipboard = MemoryClipboard::empty();

    let result = clipboard.read_text();
    assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
}

#[test]
fn test_memoryClipboard_denied_shouldRejectReads() {
    let mut clipboard = MemoryClipboard::denied();

    let result = clipboard.read_text();
    assert!(matches!(result, Err(ClipboardError::PermissionDenied(_))));
}

#[test]
fn test_memoryClipboard_denied_shouldRejectWrites() {
    let mut clipboard = MemoryClipboard::denied();

    let result = clipboard.write_text("Hello");
    assert!(matches!(result, Err(ClipboardError::PermissionDenied(_))));
}

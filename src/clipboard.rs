/*!
 * Clipboard access for the translation session.
 *
 * The session only needs two capabilities: reading text to pre-fill the input
 * (paste) and optionally writing the translation back (copy). Both go through
 * the `ClipboardBridge` trait so tests can substitute an in-memory clipboard.
 */

use crate::errors::ClipboardError;

/// Bridge to the host clipboard
pub trait ClipboardBridge: Send {
    /// Read the current clipboard text
    fn read_text(&mut self) -> Result<String, ClipboardError>;

    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard backed by arboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    /// Connect to the host clipboard
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(map_arboard_error)?;
        Ok(Self { inner })
    }
}

impl ClipboardBridge for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(map_arboard_error)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text.to_owned()).map_err(map_arboard_error)
    }
}

fn map_arboard_error(error: arboard::Error) -> ClipboardError {
    match error {
        arboard::Error::ContentNotAvailable => {
            ClipboardError::Unavailable("clipboard has no text content".to_string())
        }
        arboard::Error::ClipboardNotSupported => {
            ClipboardError::Unavailable("no clipboard on this host".to_string())
        }
        other => ClipboardError::PermissionDenied(other.to_string()),
    }
}

/// In-memory clipboard for tests and clipboard-less runs
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    denied: bool,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a clipboard pre-filled with `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            denied: false,
        }
    }

    /// Create a clipboard that denies every access
    pub fn denied() -> Self {
        Self {
            contents: None,
            denied: true,
        }
    }
}

impl ClipboardBridge for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        if self.denied {
            return Err(ClipboardError::PermissionDenied(
                "clipboard access denied by host".to_string(),
            ));
        }
        self.contents
            .clone()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard has no text content".to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::PermissionDenied(
                "clipboard access denied by host".to_string(),
            ));
        }
        self.contents = Some(text.to_owned());
        Ok(())
    }
}

//! System clipboard access for sharing property links.
//!
//! Callers go through [`ClipboardProvider`] so the share flow can run against
//! [`MemoryClipboard`] in tests and headless environments.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Longest text accepted for the clipboard. Share links are far shorter.
const MAX_CLIPBOARD_SIZE: usize = 64 * 1024;

/// Something text can be copied to
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard via arboard. Opened lazily on first copy.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match &mut self.clipboard {
            Some(clipboard) => clipboard,
            slot => slot.insert(Clipboard::new().context("Failed to initialize clipboard")?),
        };
        clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Clipboard that only remembers the last copied text
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every copy fails, as on a headless machine
    pub fn unavailable() -> Self {
        Self { text: None, fail: true }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            bail!("Clipboard unavailable");
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }

    Ok(())
}

/// Validate `text`, then copy it through `provider`.
///
/// # Errors
/// Returns error if:
/// - Text is empty or larger than 64 KiB
/// - The provider fails (clipboard locked, no display server, permission denied)
pub fn copy_with_provider(text: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    validate_clipboard_text(text)?;
    provider.set_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_link_with_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        copy_with_provider("/property/prop-1", &mut clipboard).unwrap();
        assert_eq!(clipboard.text(), Some("/property/prop-1"));
    }

    #[test]
    fn test_second_copy_overwrites() {
        let mut clipboard = MemoryClipboard::new();
        copy_with_provider("/property/prop-1", &mut clipboard).unwrap();
        copy_with_provider("/property/prop-2", &mut clipboard).unwrap();
        assert_eq!(clipboard.text(), Some("/property/prop-2"));
    }

    #[test]
    fn test_provider_failure_propagates() {
        let mut clipboard = MemoryClipboard::unavailable();
        let err = copy_with_provider("/property/prop-1", &mut clipboard).unwrap_err();
        assert!(err.to_string().contains("unavailable"));
        assert_eq!(clipboard.text(), None);
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut clipboard = MemoryClipboard::new();
        let err = copy_with_provider("", &mut clipboard).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_size_limit_is_bytes() {
        let mut clipboard = MemoryClipboard::new();
        assert!(copy_with_provider(&"a".repeat(MAX_CLIPBOARD_SIZE), &mut clipboard).is_ok());

        let err = copy_with_provider(&"🚀".repeat(MAX_CLIPBOARD_SIZE / 4 + 1), &mut clipboard)
            .unwrap_err();
        assert!(err.to_string().contains("too large"));
    }
}

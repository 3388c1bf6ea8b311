//! Clipboard capability used by the copy action.
//!
//! [`SystemClipboard`] is a thin wrapper around the `arboard` crate. On some
//! platforms or in headless CI environments clipboard initialization fails;
//! the error comes back to the caller as a [`ClipboardError`] rather than a
//! panic. [`MemoryClipboard`] keeps writes in process, for tests and for
//! machines without a clipboard.

use std::cell::RefCell;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard backend error: {0}")]
    Backend(#[from] arboard::Error),

    /// The blocking clipboard worker did not finish.
    #[error("clipboard worker failed: {0}")]
    Worker(String),

    #[error("clipboard write denied: {0}")]
    Denied(String),
}

/// Asynchronous text clipboard.
///
/// Futures are not required to be `Send`: the page runs on a single thread.
#[async_trait(?Send)]
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Set the system clipboard to `text`, synchronously.
pub fn set(text: &str) -> Result<(), ClipboardError> {
    let mut cb = arboard::Clipboard::new()?;
    cb.set_text(text.to_owned()).map_err(ClipboardError::from)
}

/// The operating system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[async_trait(?Send)]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || set(&text))
            .await
            .map_err(|e| ClipboardError::Worker(e.to_string()))?
    }
}

/// Process-local clipboard that records every write.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: RefCell<Vec<String>>,
    deny: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail with [`ClipboardError::Denied`].
    pub fn denying(reason: impl Into<String>) -> Self {
        Self {
            writes: RefCell::default(),
            deny: Some(reason.into()),
        }
    }

    /// Current contents: the last successful write.
    pub fn contents(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(reason) = &self.deny {
            return Err(ClipboardError::Denied(reason.clone()));
        }
        self.writes.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_copy_no_panic() {
        // Best-effort: headless CI usually has no clipboard, only check we don't panic.
        let _ = set("NIET.ly/Ab3dE9");
    }

    #[tokio::test]
    async fn memory_clipboard_records_writes() {
        let cb = MemoryClipboard::new();
        assert_eq!(cb.contents(), None);
        cb.write_text("first").await.unwrap();
        cb.write_text("second").await.unwrap();
        assert_eq!(cb.contents().as_deref(), Some("second"));
        assert_eq!(cb.writes(), vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn denying_clipboard_keeps_nothing() {
        let cb = MemoryClipboard::denying("permission denied");
        let err = cb.write_text("text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Denied(ref r) if r == "permission denied"));
        assert!(err.to_string().contains("permission denied"));
        assert!(cb.writes().is_empty());
    }
}

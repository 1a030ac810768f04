use crate::core::Clipboard;
use crate::utils::error::{AppError, Result};
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::sync::Arc;

/// The desktop clipboard. One handle is held for the whole session: on X11
/// and Wayland the copied text is only served while a handle is alive.
#[cfg(feature = "cli")]
pub struct SystemClipboard {
    inner: Mutex<arboard::Clipboard>,
}

#[cfg(feature = "cli")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = arboard::Clipboard::new().map_err(|e| AppError::Clipboard {
            message: e.to_string(),
        })?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }
}

#[cfg(feature = "cli")]
impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = self.inner.lock().map_err(|_| AppError::Clipboard {
            message: "clipboard lock poisoned".to_string(),
        })?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| AppError::Clipboard {
                message: e.to_string(),
            })
    }
}

/// The desktop clipboard when one can be opened, otherwise an in-memory one.
#[cfg(feature = "cli")]
pub fn system_or_memory() -> Arc<dyn Clipboard> {
    match SystemClipboard::new() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(e) => {
            tracing::warn!("⚠️ System clipboard unavailable, copies stay in memory: {}", e);
            Arc::new(MemoryClipboard::new())
        }
    }
}

/// Keeps the last copied text in memory. Used when no desktop clipboard is
/// available (`--no-clipboard`, headless sessions).
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut guard = self.contents.lock().map_err(|_| AppError::Clipboard {
            message: "clipboard lock poisoned".to_string(),
        })?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_memory_clipboard_keeps_last_text() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());

        clipboard.write_text("primeiro").unwrap();
        clipboard.write_text("segundo").unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("segundo"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_session_clipboard_accepts_repeated_writes() {
        let clipboard = system_or_memory();
        clipboard.write_text("espetinho").unwrap();
        clipboard.write_text("espetinho de novo").unwrap();
    }

    #[test]
    fn test_shared_memory_clipboard_through_port() {
        let memory = Arc::new(MemoryClipboard::new());
        let port: Arc<dyn Clipboard> = memory.clone();
        port.write_text("picanha").unwrap();
        assert_eq!(memory.contents().as_deref(), Some("picanha"));
    }
}

use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult<T = ()> = Result<T, ClipboardError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    #[error("failed to write clipboard")]
    WriteError,
    #[error("failed to read clipboard")]
    ReadError,
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}

/// Read/write access to a clipboard, as seen by the history backend.
pub trait ClipboardAccess: Send {
    /// Current text content, `None` when the clipboard holds no text.
    fn read_text(&mut self) -> ClipboardResult<Option<String>>;

    fn write_text(&mut self, text: &str) -> ClipboardResult;
}

/// The machine clipboard. Reads always go through arboard; writes use the
/// configured backend.
#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    backend: ClipboardBackend,
}

impl SystemClipboard {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self { backend }
    }
}

impl ClipboardAccess for SystemClipboard {
    fn read_text(&mut self) -> ClipboardResult<Option<String>> {
        system::read()
    }

    fn write_text(&mut self, text: &str) -> ClipboardResult {
        copy_to_clipboard(text, self.backend)
    }
}

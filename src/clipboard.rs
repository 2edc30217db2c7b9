//! Clipboard module for clipdeck
//!
//! Provides clipboard functionality with support for:
//! - System clipboard (via arboard), used for both watching and pasting
//! - OSC 52 escape sequences (write-only, for remote terminals)
//! - Auto mode (system with OSC 52 fallback)

mod backend;
mod osc52;
mod system;

pub use backend::{
    ClipboardAccess, ClipboardError, ClipboardResult, SystemClipboard, copy_to_clipboard,
};

//! Clipboard backend
//!
//! Owns everything the views only see through the gateway: the clipboard
//! watcher, the history ring, the persisted config and the autostart
//! entry. It runs on its own worker thread (see [`worker`]).

mod autostart;
mod service;
mod storage;
mod store;
pub mod worker;

pub use autostart::{Autostart, AutostartPort};
pub use service::Backend;
pub use storage::HistoryStorage;
pub use store::ClipboardHistory;

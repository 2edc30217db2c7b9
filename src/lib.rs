//! clipdeck library - terminal clipboard history
//!
//! The binary wires these together: the [`backend`] runs on a worker
//! thread, the [`app`] pages talk to it only through the [`gateway`].

pub mod about;
pub mod app;
pub mod backend;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod notification;
pub mod prefs;
pub mod theme;
pub mod widgets;
pub mod window;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Route};
pub use config::Config;

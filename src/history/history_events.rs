use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::HistoryState;
use crate::gateway::{Command, Gateway, Response};
use crate::window::WindowControl;

/// Handle keys on the history list.
///
/// Returns true if the key was consumed.
pub fn handle_history_key(
    history: &mut HistoryState,
    key: KeyEvent,
    gateway: &mut dyn Gateway,
    window: &mut dyn WindowControl,
) -> bool {
    match key.code {
        KeyCode::Esc => {
            window.hide();
            true
        }
        KeyCode::Char('j') | KeyCode::Down => {
            history.select_next();
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            history.select_previous();
            true
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = history.selected_item().map(|item| item.id) {
                paste(id, gateway, window);
            }
            true
        }
        _ => false,
    }
}

/// Paste the entry under a left click, if any.
pub fn handle_history_click(
    history: &HistoryState,
    column: u16,
    row: u16,
    gateway: &mut dyn Gateway,
    window: &mut dyn WindowControl,
) -> bool {
    let Some(id) = history.item_at(column, row).map(|item| item.id) else {
        return false;
    };
    paste(id, gateway, window);
    true
}

/// Hides the window, then asks the backend to paste `id`.
///
/// The window is hidden first so focus returns to whatever the user is
/// pasting into. It stays hidden even if the paste later fails.
pub fn paste(id: u64, gateway: &mut dyn Gateway, window: &mut dyn WindowControl) {
    window.hide();
    let request_id = gateway.invoke(Command::Paste { id });
    log::debug!("paste requested for entry {} (request {})", id, request_id);
}

pub fn on_paste_response(response: &Response) {
    if let Err(e) = &response.result {
        log::debug!("paste request {} failed: {}", response.request_id, e);
    }
}

#[cfg(test)]
#[path = "history_events_tests.rs"]
mod history_events_tests;

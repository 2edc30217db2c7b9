use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::{PrefsField, PrefsState};
use crate::gateway::Gateway;

/// Handle keys on the preferences page.
///
/// Returns true if the key was consumed.
pub fn handle_prefs_key(prefs: &mut PrefsState, key: KeyEvent, gateway: &mut dyn Gateway) -> bool {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
            prefs.focus_next();
            true
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
            prefs.focus_previous();
            true
        }
        KeyCode::Enter | KeyCode::Char(' ') if prefs.focus() == PrefsField::Autostart => {
            prefs.toggle_autostart(gateway);
            true
        }
        KeyCode::Char('+') => {
            prefs.step_history_limit(gateway, true);
            true
        }
        KeyCode::Char('-') => {
            prefs.step_history_limit(gateway, false);
            true
        }
        KeyCode::Char('l') | KeyCode::Right if prefs.focus() == PrefsField::HistoryLimit => {
            prefs.step_history_limit(gateway, true);
            true
        }
        KeyCode::Char('h') | KeyCode::Left if prefs.focus() == PrefsField::HistoryLimit => {
            prefs.step_history_limit(gateway, false);
            true
        }
        _ => false,
    }
}

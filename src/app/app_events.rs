use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::route::Route;
use crate::gateway::{CommandKind, Response};
use crate::history::history_events;
use crate::prefs::prefs_events;
use crate::window::WindowControl;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

impl App {
    /// One turn of the event loop: apply backend results, then wait briefly
    /// for terminal input.
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_backend();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Applies finished gateway calls, then re-fetches for any
    /// notifications that arrived.
    pub fn poll_backend(&mut self) {
        for response in self.gateway.poll_responses() {
            self.apply_response(response);
        }

        self.history.poll_notifications(self.gateway.as_mut());
        self.prefs.poll_notifications(self.gateway.as_mut());
    }

    fn apply_response(&mut self, response: Response) {
        match response.kind {
            CommandKind::History => self.history.apply_response(response),
            CommandKind::Paste => history_events::on_paste_response(&response),
            CommandKind::GetConfig => self.prefs.apply_config_response(response),
            CommandKind::SetConfig => {
                if self.prefs.apply_set_response(response) {
                    self.notification.show("Preferences saved");
                }
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if !self.window.is_visible() {
            self.handle_hidden_key(key);
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        match self.route {
            Route::Root => {
                history_events::handle_history_key(
                    &mut self.history,
                    key,
                    self.gateway.as_mut(),
                    &mut self.window,
                );
            }
            Route::Prefs => {
                prefs_events::handle_prefs_key(&mut self.prefs, key, self.gateway.as_mut());
            }
            Route::About => {}
        }
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.should_quit = true;
                    return true;
                }
                KeyCode::Char('p') => {
                    self.navigate(Route::Prefs);
                    return true;
                }
                KeyCode::Char('a') => {
                    self.navigate(Route::About);
                    return true;
                }
                _ => return false,
            }
        }

        if key.code == KeyCode::Esc && self.route != Route::Root {
            self.navigate(Route::Root);
            return true;
        }
        false
    }

    /// While hidden, `q` quits and any other key brings the history back.
    fn handle_hidden_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if !ctrl => self.should_quit = true,
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.should_quit = true,
            _ => {
                self.window.show();
                self.navigate(Route::Root);
            }
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !self.window.is_visible() || self.route != Route::Root {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                history_events::handle_history_click(
                    &self.history,
                    mouse.column,
                    mouse.row,
                    self.gateway.as_mut(),
                    &mut self.window,
                );
            }
            MouseEventKind::ScrollDown => self.history.select_next(),
            MouseEventKind::ScrollUp => self.history.select_previous(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

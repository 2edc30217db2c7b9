//! Window visibility
//!
//! The terminal UI is clipdeck's window. Hiding collapses it to a one-line
//! status bar while the backend keeps recording the clipboard.

pub trait WindowControl {
    fn hide(&mut self);

    fn show(&mut self);

    fn is_visible(&self) -> bool;
}

#[derive(Debug)]
pub struct WindowState {
    visible: bool,
}

impl Default for WindowState {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl WindowState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WindowControl for WindowState {
    fn hide(&mut self) {
        if self.visible {
            log::debug!("hide window");
        }
        self.visible = false;
    }

    fn show(&mut self) {
        if !self.visible {
            log::debug!("show window");
        }
        self.visible = true;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

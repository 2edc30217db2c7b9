use std::time::{Duration, Instant};

use crate::theme::notification::{INFO, NotificationColors, WARNING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Short-lived confirmation, e.g. saved preferences
    #[default]
    Info,
    /// Stays up longer, e.g. an unreadable config file at startup
    Warning,
}

impl NotificationKind {
    fn duration(self) -> Duration {
        match self {
            NotificationKind::Info => Duration::from_millis(1500),
            NotificationKind::Warning => Duration::from_secs(10),
        }
    }

    pub fn colors(self) -> &'static NotificationColors {
        match self {
            NotificationKind::Info => &INFO,
            NotificationKind::Warning => &WARNING,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// At most one notification is visible; a new one replaces the old.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationKind::Info));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationKind::Warning));
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(notif) = &self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    #[cfg(test)]
    pub(crate) fn current_mut(&mut self) -> Option<&mut Notification> {
        self.current.as_mut()
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;

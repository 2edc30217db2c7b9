use super::route::Route;
use crate::gateway::{EventBus, Gateway, Topic};
use crate::history::HistoryState;
use crate::notification::NotificationState;
use crate::prefs::PrefsState;
use crate::window::WindowState;

/// The UI side of clipdeck.
///
/// Every page is created up front and subscribed for the whole session, so
/// switching routes never drops a notification. Subscriptions are released
/// when the `App` is dropped.
pub struct App {
    pub route: Route,
    pub history: HistoryState,
    pub prefs: PrefsState,
    pub window: WindowState,
    pub notification: NotificationState,
    pub should_quit: bool,
    pub(super) gateway: Box<dyn Gateway>,
}

impl App {
    pub fn new(gateway: Box<dyn Gateway>, events: &EventBus) -> Self {
        Self {
            route: Route::default(),
            history: HistoryState::new(Some(events.subscribe(Topic::HistoryUpdated))),
            prefs: PrefsState::new(Some(events.subscribe(Topic::ConfigUpdated))),
            window: WindowState::new(),
            notification: NotificationState::new(),
            should_quit: false,
            gateway,
        }
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            log::debug!("navigate {} -> {}", self.route, route);
        }
        self.route = route;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

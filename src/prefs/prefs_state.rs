use crate::config::{Config, clamp_history_limit};
use crate::gateway::{Command, Gateway, Reply, RequestId, Response, Subscription};

/// Amount one step of the history limit control moves by.
pub const LIMIT_STEP: usize = 10;

/// Focusable controls on the preferences page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefsField {
    #[default]
    Autostart,
    HistoryLimit,
}

/// A `set_config` call whose value is shown before the backend confirms it.
#[derive(Debug, Clone)]
struct PendingWrite {
    request_id: RequestId,
    config: Config,
}

/// State of the preferences page.
///
/// `config` is the last value confirmed by `get_config`; `None` until the
/// first one arrives. Writes are shown optimistically: the written value is
/// displayed until a `get_config` issued after it replaces it, and is
/// rolled back if the write fails.
pub struct PrefsState {
    config: Option<Config>,
    pending: Option<PendingWrite>,
    focus: PrefsField,
    subscription: Option<Subscription>,
    applied_request: Option<RequestId>,
}

impl Default for PrefsState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PrefsState {
    /// `subscription` should be a `config-updated` subscription.
    pub fn new(subscription: Option<Subscription>) -> Self {
        Self {
            config: None,
            pending: None,
            focus: PrefsField::default(),
            subscription,
            applied_request: None,
        }
    }

    /// Re-fetches once if any notification arrived since the last call.
    pub fn poll_notifications(&mut self, gateway: &mut dyn Gateway) -> bool {
        let pending = self
            .subscription
            .as_ref()
            .map(|subscription| subscription.drain())
            .unwrap_or(0);

        if pending == 0 {
            return false;
        }
        self.refresh(gateway);
        true
    }

    pub fn refresh(&mut self, gateway: &mut dyn Gateway) {
        gateway.invoke(Command::GetConfig);
    }

    /// Applies a `get_config` response.
    pub fn apply_config_response(&mut self, response: Response) {
        let config = match response.result {
            Ok(Reply::Config(config)) => config,
            Ok(other) => {
                log::warn!("unexpected reply to `get_config`: {:?}", other);
                return;
            }
            Err(e) => {
                log::error!("failed to load preferences: {}", e);
                return;
            }
        };

        if self
            .applied_request
            .is_some_and(|applied| response.request_id < applied)
        {
            log::debug!("dropping stale config response {}", response.request_id);
            return;
        }
        self.applied_request = Some(response.request_id);
        self.config = Some(config);

        // A read issued after the write already reflects it.
        if self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.request_id < response.request_id)
        {
            self.pending = None;
        }
    }

    /// Applies a `set_config` response. Returns true if the write succeeded.
    pub fn apply_set_response(&mut self, response: Response) -> bool {
        match response.result {
            Ok(_) => true,
            Err(e) => {
                log::debug!("set_config {} failed: {}", response.request_id, e);
                if self
                    .pending
                    .as_ref()
                    .is_some_and(|pending| pending.request_id == response.request_id)
                {
                    self.pending = None;
                }
                false
            }
        }
    }

    /// The value to display: a pending write if any, else the confirmed one.
    pub fn displayed(&self) -> Option<&Config> {
        self.pending
            .as_ref()
            .map(|pending| &pending.config)
            .or(self.config.as_ref())
    }

    pub fn confirmed(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.config.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }

    pub fn focus(&self) -> PrefsField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = PrefsField::HistoryLimit;
    }

    pub fn focus_previous(&mut self) {
        self.focus = PrefsField::Autostart;
    }

    /// Writes the displayed config with `autostart` flipped.
    ///
    /// Before the config has loaded there is nothing to flip: the call is
    /// logged and no command is issued.
    pub fn toggle_autostart(&mut self, gateway: &mut dyn Gateway) -> bool {
        let Some(current) = self.displayed() else {
            log::warn!("autostart toggled before preferences loaded");
            return false;
        };
        let config = Config {
            autostart: !current.autostart,
            ..current.clone()
        };
        self.write(gateway, config);
        true
    }

    /// Moves the history limit one step up or down, within bounds.
    ///
    /// Issues no command when the limit is already at the bound.
    pub fn step_history_limit(&mut self, gateway: &mut dyn Gateway, increase: bool) -> bool {
        let Some(current) = self.displayed() else {
            log::warn!("history limit changed before preferences loaded");
            return false;
        };
        let limit = current.effective_history_limit();
        let stepped = if increase {
            limit.saturating_add(LIMIT_STEP)
        } else {
            limit.saturating_sub(LIMIT_STEP)
        };
        let stepped = clamp_history_limit(stepped);
        if stepped == current.history_limit {
            return false;
        }

        let config = Config {
            history_limit: stepped,
            ..current.clone()
        };
        self.write(gateway, config);
        true
    }

    fn write(&mut self, gateway: &mut dyn Gateway, config: Config) {
        let request_id = gateway.invoke(Command::SetConfig {
            config: config.clone(),
        });
        self.pending = Some(PendingWrite { request_id, config });
    }
}

#[cfg(test)]
#[path = "prefs_state_tests.rs"]
mod prefs_state_tests;

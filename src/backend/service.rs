use std::path::PathBuf;

use super::autostart::AutostartPort;
use super::storage::HistoryStorage;
use super::store::ClipboardHistory;
use crate::clipboard::ClipboardAccess;
use crate::config::{self, Config};
use crate::gateway::{Command, CommandError, EventBus, Reply, Request, Response, Topic};

/// Backend state and command handling.
///
/// Every mutation is followed by the matching notification so subscribed
/// views re-fetch.
pub struct Backend {
    history: ClipboardHistory,
    config: Config,
    clipboard: Box<dyn ClipboardAccess>,
    events: EventBus,
    autostart: Option<Box<dyn AutostartPort>>,
    storage: Option<HistoryStorage>,
    config_path: Option<PathBuf>,
    /// Last clipboard text observed or written, so the watcher ignores it.
    last_seen: Option<String>,
}

impl Backend {
    pub fn new(config: Config, clipboard: Box<dyn ClipboardAccess>, events: EventBus) -> Self {
        Self {
            history: ClipboardHistory::new(config.effective_history_limit()),
            config,
            clipboard,
            events,
            autostart: None,
            storage: None,
            config_path: None,
            last_seen: None,
        }
    }

    /// Restores persisted history and keeps saving to the same file.
    pub fn with_storage(mut self, storage: HistoryStorage) -> Self {
        let limit = self.config.effective_history_limit();
        self.history = match ClipboardHistory::from_items(storage.load_or_empty(), limit) {
            Ok(history) => history,
            Err(e) => {
                log::warn!("Ignoring history file {:?}: {}", storage.path(), e);
                ClipboardHistory::new(limit)
            }
        };
        self.last_seen = self.history.front().map(|item| item.value.clone());
        self.storage = Some(storage);
        self
    }

    pub fn with_autostart(mut self, autostart: impl AutostartPort + 'static) -> Self {
        self.autostart = Some(Box::new(autostart));
        self
    }

    /// Where `set_config` writes the config file.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Brings the login item in line with the config and tells mounted
    /// views to load.
    pub fn start(&mut self) {
        if let Some(autostart) = &self.autostart {
            let synced = match autostart.is_enabled() {
                Ok(enabled) if enabled == self.config.autostart => Ok(()),
                Ok(_) => autostart.set_enabled(self.config.autostart),
                Err(e) => Err(e),
            };
            if let Err(e) = synced {
                log::warn!("could not sync autostart entry: {}", e);
            }
        }

        self.events.emit(Topic::HistoryUpdated);
        self.events.emit(Topic::ConfigUpdated);
    }

    pub fn handle(&mut self, request: Request) -> Response {
        let kind = request.command.kind();
        log::debug!("handle `{}` (request {})", kind.name(), request.request_id);

        let result = match request.command {
            Command::History => Ok(Reply::History(self.history.snapshot())),
            Command::Paste { id } => self.paste(id).map(|()| Reply::Done),
            Command::GetConfig => Ok(Reply::Config(self.config.clone())),
            Command::SetConfig { config } => self.set_config(config).map(|()| Reply::Done),
        };

        if let Err(e) = &result {
            log::debug!("`{}` failed: {}", kind.name(), e);
        }

        Response::new(request.request_id, kind, result)
    }

    fn paste(&mut self, id: u64) -> Result<(), CommandError> {
        let value = self
            .history
            .get(id)
            .map(|item| item.value.clone())
            .ok_or(CommandError::ItemNotFound(id))?;

        self.clipboard
            .write_text(&value)
            .map_err(|e| CommandError::Clipboard(e.to_string()))?;

        self.history.promote(id);
        self.last_seen = Some(value);
        self.persist_history();
        self.events.emit(Topic::HistoryUpdated);
        Ok(())
    }

    fn set_config(&mut self, config: Config) -> Result<(), CommandError> {
        if config.autostart != self.config.autostart
            && let Err(e) = self.apply_autostart(config.autostart)
        {
            // Views may hold an optimistic value; make them re-read ours.
            self.events.emit(Topic::ConfigUpdated);
            return Err(e);
        }

        self.config = config;

        let persisted = match &self.config_path {
            Some(path) => config::save_config_to(path, &self.config).map_err(|e| {
                CommandError::Persist {
                    what: "config",
                    reason: e.to_string(),
                }
            }),
            None => Ok(()),
        };

        if self.history.resize(self.config.effective_history_limit()) {
            self.persist_history();
            self.events.emit(Topic::HistoryUpdated);
        }
        self.events.emit(Topic::ConfigUpdated);

        persisted
    }

    fn apply_autostart(&self, enabled: bool) -> Result<(), CommandError> {
        match &self.autostart {
            Some(autostart) => autostart
                .set_enabled(enabled)
                .map_err(|e| CommandError::Autostart(e.to_string())),
            None if enabled => Err(CommandError::Autostart(
                "not supported on this platform".to_string(),
            )),
            None => Ok(()),
        }
    }

    /// One watcher tick: records new clipboard text.
    /// Returns true if history changed.
    pub fn poll_clipboard(&mut self) -> bool {
        let text = match self.clipboard.read_text() {
            Ok(Some(text)) => text,
            Ok(None) => return false,
            Err(e) => {
                log::debug!("clipboard read failed: {}", e);
                return false;
            }
        };

        if text.is_empty() || self.last_seen.as_deref() == Some(text.as_str()) {
            return false;
        }

        log::debug!("clipboard change ({} bytes)", text.len());
        let pushed = self.history.push(&text).is_some();
        self.last_seen = Some(text);
        if !pushed {
            return false;
        }
        self.persist_history();
        self.events.emit(Topic::HistoryUpdated);
        true
    }

    pub fn persist_history(&self) {
        if let Some(storage) = &self.storage
            && let Err(e) = storage.save(&self.history.snapshot())
        {
            log::error!("failed to save history to {:?}: {}", storage.path(), e);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &ClipboardHistory {
        &self.history
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// Identifier handed out per gateway call. Monotonic within one gateway.
pub type RequestId = u64;

/// One clipboard entry as the backend publishes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: u64,
    pub value: String,
}

impl HistoryItem {
    pub fn new(id: u64, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    History,
    Paste { id: u64 },
    GetConfig,
    SetConfig { config: Config },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    History,
    Paste,
    GetConfig,
    SetConfig,
}

impl CommandKind {
    /// Wire name of the command.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::History => "history",
            CommandKind::Paste => "paste",
            CommandKind::GetConfig => "get_config",
            CommandKind::SetConfig => "set_config",
        }
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::History => CommandKind::History,
            Command::Paste { .. } => CommandKind::Paste,
            Command::GetConfig => CommandKind::GetConfig,
            Command::SetConfig { .. } => CommandKind::SetConfig,
        }
    }
}

/// Successful command results. `Done` covers commands without a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    History(Vec<HistoryItem>),
    Config(Config),
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("couldn't find item `{0}` in history")]
    ItemNotFound(u64),

    #[error("clipboard: {0}")]
    Clipboard(String),

    #[error("autostart: {0}")]
    Autostart(String),

    #[error("failed to persist {what}: {reason}")]
    Persist { what: &'static str, reason: String },

    #[error("backend is not running")]
    Disconnected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub request_id: RequestId,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub request_id: RequestId,
    pub kind: CommandKind,
    pub result: Result<Reply, CommandError>,
}

impl Response {
    pub fn new(
        request_id: RequestId,
        kind: CommandKind,
        result: Result<Reply, CommandError>,
    ) -> Self {
        Self {
            request_id,
            kind,
            result,
        }
    }
}

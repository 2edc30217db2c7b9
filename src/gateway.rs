//! Gateway between the views and the clipboard backend
//!
//! Views never touch backend state. They issue named commands through a
//! [`Gateway`] and learn about changes from zero-payload notifications on
//! the [`EventBus`], re-fetching whatever the notification names.

mod channel;
pub mod command;
pub mod events;

pub use channel::{ChannelGateway, Gateway};
pub use command::{
    Command, CommandError, CommandKind, HistoryItem, Reply, Request, RequestId, Response,
};
pub use events::{EventBus, Subscription, Topic};

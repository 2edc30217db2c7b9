//! Zero-payload publish/subscribe channel
//!
//! The backend emits a [`Topic`] whenever the resource it names changes;
//! every live [`Subscription`] for that topic receives one signal. A
//! subscription is released exactly once, when it is dropped.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    HistoryUpdated,
    ConfigUpdated,
}

impl Topic {
    pub fn name(self) -> &'static str {
        match self {
            Topic::HistoryUpdated => "history-updated",
            Topic::ConfigUpdated => "config-updated",
        }
    }
}

struct Subscriber {
    id: u64,
    topic: Topic,
    tx: Sender<()>,
}

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<Subscriber>,
}

fn lock(subscribers: &Mutex<Subscribers>) -> MutexGuard<'_, Subscribers> {
    subscribers.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<Mutex<Subscribers>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, topic: Topic) -> Subscription {
        let (tx, rx) = mpsc::channel();
        let mut subscribers = lock(&self.subscribers);
        subscribers.next_id += 1;
        let id = subscribers.next_id;
        subscribers.entries.push(Subscriber { id, topic, tx });

        log::debug!("subscribed to `{}` ({})", topic.name(), id);

        Subscription {
            id,
            topic,
            rx,
            bus: Arc::downgrade(&self.subscribers),
        }
    }

    /// Signals every subscriber of `topic`. Returns how many were reached.
    pub fn emit(&self, topic: Topic) -> usize {
        let mut subscribers = lock(&self.subscribers);
        let mut delivered = 0;
        subscribers.entries.retain(|subscriber| {
            if subscriber.topic != topic {
                return true;
            }
            match subscriber.tx.send(()) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(_) => false,
            }
        });

        log::debug!("emit `{}` to {} subscriber(s)", topic.name(), delivered);
        delivered
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        lock(&self.subscribers)
            .entries
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }
}

/// Handle for one subscription. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    topic: Topic,
    rx: Receiver<()>,
    bus: Weak<Mutex<Subscribers>>,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Consumes pending signals and returns how many there were.
    pub fn drain(&self) -> usize {
        let mut count = 0;
        loop {
            match self.rx.try_recv() {
                Ok(()) => count += 1,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        count
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.bus.upgrade() {
            lock(&subscribers).entries.retain(|s| s.id != self.id);
        }
        log::info!("unsubscribed from `{}`", self.topic.name());
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;

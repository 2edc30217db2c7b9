use std::collections::VecDeque;

use crate::config::clamp_history_limit;
use crate::error::ClipdeckError;
use crate::gateway::HistoryItem;

/// Bounded clipboard history, most recent entry first.
///
/// Ids are handed out from a counter that only moves forward, so an id is
/// never reused while the process runs, and survive promotion to the front.
#[derive(Debug)]
pub struct ClipboardHistory {
    entries: VecDeque<HistoryItem>,
    limit: usize,
    next_id: u64,
}

impl ClipboardHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: clamp_history_limit(limit),
            next_id: 0,
        }
    }

    /// Rebuilds a history from persisted items, keeping their order and ids.
    ///
    /// Fails when the largest persisted id leaves no id for the next entry.
    pub fn from_items(items: Vec<HistoryItem>, limit: usize) -> Result<Self, ClipdeckError> {
        let mut history = Self::new(limit);
        history.next_id = match items.iter().map(|item| item.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or(ClipdeckError::HistoryIdsExhausted(max))?,
            None => 0,
        };

        let mut seen = std::collections::HashSet::new();
        history.entries = items
            .into_iter()
            .filter(|item| !item.value.is_empty() && seen.insert(item.id))
            .take(history.limit)
            .collect();
        Ok(history)
    }

    /// Records `value` as the newest entry.
    ///
    /// Empty text is ignored. Text already present is moved to the front
    /// instead of duplicated. Returns the id of the front entry, or `None`
    /// when the text is empty or no ids are left.
    pub fn push(&mut self, value: &str) -> Option<u64> {
        if value.is_empty() {
            return None;
        }

        if let Some(pos) = self.entries.iter().position(|item| item.value == value) {
            let item = self.entries.remove(pos)?;
            let id = item.id;
            self.entries.push_front(item);
            return Some(id);
        }

        let id = self.next_id;
        let Some(next_id) = id.checked_add(1) else {
            log::warn!("history ids exhausted, dropping new entry");
            return None;
        };
        self.next_id = next_id;
        self.entries.push_front(HistoryItem::new(id, value));
        self.entries.truncate(self.limit);
        Some(id)
    }

    /// Moves the entry with `id` to the front.
    pub fn promote(&mut self, id: u64) -> Option<&HistoryItem> {
        let pos = self.entries.iter().position(|item| item.id == id)?;
        let item = self.entries.remove(pos)?;
        self.entries.push_front(item);
        self.entries.front()
    }

    pub fn get(&self, id: u64) -> Option<&HistoryItem> {
        self.entries.iter().find(|item| item.id == id)
    }

    pub fn front(&self) -> Option<&HistoryItem> {
        self.entries.front()
    }

    /// Changes the limit, dropping the oldest entries past it.
    /// Returns true if entries were dropped.
    pub fn resize(&mut self, limit: usize) -> bool {
        self.limit = clamp_history_limit(limit);
        let before = self.entries.len();
        self.entries.truncate(self.limit);
        self.entries.len() != before
    }

    pub fn snapshot(&self) -> Vec<HistoryItem> {
        self.entries.iter().cloned().collect()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

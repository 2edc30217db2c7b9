use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;

use crate::gateway::{Command, Gateway, HistoryItem, Reply, RequestId, Response, Subscription};

/// State of the clipboard history list.
///
/// The snapshot is replaced wholesale by every accepted `history` response;
/// nothing here edits entries. Responses older than the newest one already
/// applied are discarded, so overlapping refreshes cannot show a stale list.
pub struct HistoryState {
    items: Vec<HistoryItem>,
    selected: usize,
    subscription: Option<Subscription>,
    latest_request: Option<RequestId>,
    applied_request: Option<RequestId>,
    /// Scroll offset kept across frames by the list widget
    pub(super) list_state: ListState,
    /// Inner list area of the last frame, for mouse hit testing
    pub(super) list_area: Option<Rect>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HistoryState {
    /// `subscription` should be a `history-updated` subscription; it is
    /// released when the state is dropped.
    pub fn new(subscription: Option<Subscription>) -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            subscription,
            latest_request: None,
            applied_request: None,
            list_state: ListState::default(),
            list_area: None,
        }
    }

    /// Re-fetches once if any notification arrived since the last call.
    /// Returns true if a fetch was issued.
    pub fn poll_notifications(&mut self, gateway: &mut dyn Gateway) -> bool {
        let pending = self
            .subscription
            .as_ref()
            .map(Subscription::drain)
            .unwrap_or(0);

        if pending == 0 {
            return false;
        }
        self.refresh(gateway);
        true
    }

    pub fn refresh(&mut self, gateway: &mut dyn Gateway) {
        self.latest_request = Some(gateway.invoke(Command::History));
    }

    /// Applies a `history` response. Failures keep the current snapshot.
    pub fn apply_response(&mut self, response: Response) {
        match response.result {
            Ok(Reply::History(items)) => {
                if self
                    .applied_request
                    .is_some_and(|applied| response.request_id < applied)
                {
                    log::debug!(
                        "dropping stale history response {} (applied {:?})",
                        response.request_id,
                        self.applied_request
                    );
                    return;
                }
                self.applied_request = Some(response.request_id);
                self.replace(items);
            }
            Ok(other) => log::warn!("unexpected reply to `history`: {:?}", other),
            Err(e) => log::error!("failed to fetch history: {}", e),
        }
    }

    pub fn replace(&mut self, items: Vec<HistoryItem>) {
        self.items = items;
        self.clamp_selection();
    }

    /// Keeps the selection inside the current snapshot.
    pub fn clamp_selection(&mut self) {
        self.selected = match self.items.len().checked_sub(1) {
            Some(last) => self.selected.min(last),
            None => 0,
        };
    }

    pub fn select_next(&mut self) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.selected = (self.selected + 1).min(last);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&HistoryItem> {
        self.items.get(self.selected)
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Newest request issued, whether or not it has been answered.
    pub fn latest_request(&self) -> Option<RequestId> {
        self.latest_request
    }

    /// Entry rendered at a terminal cell in the last frame.
    pub fn item_at(&self, column: u16, row: u16) -> Option<&HistoryItem> {
        let area = self.list_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.list_state.offset() + usize::from(row - area.y);
        self.items.get(index)
    }
}

#[cfg(test)]
#[path = "history_state_tests.rs"]
mod history_state_tests;

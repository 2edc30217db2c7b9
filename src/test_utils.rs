//! Shared test utilities for clipdeck
//!
//! Fakes for the seams the views and the backend talk through: the
//! gateway, the window and the clipboard.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::backend::AutostartPort;
    use crate::clipboard::{ClipboardAccess, ClipboardError, ClipboardResult};
    use crate::error::ClipdeckError;
    use crate::gateway::{
        Command, CommandError, CommandKind, EventBus, Gateway, HistoryItem, Reply, RequestId,
        Response,
    };
    use crate::window::WindowControl;

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn items(values: &[(u64, &str)]) -> Vec<HistoryItem> {
        values
            .iter()
            .map(|&(id, value)| HistoryItem::new(id, value))
            .collect()
    }

    #[derive(Default)]
    struct MockGatewayInner {
        next_id: RequestId,
        calls: Vec<(RequestId, Command)>,
        rejected: Vec<CommandKind>,
        pending: VecDeque<Response>,
    }

    /// Gateway that records every call. Clones share the same log so a test
    /// can keep a handle after boxing one into an `App`.
    #[derive(Clone, Default)]
    pub struct MockGateway {
        inner: Rc<RefCell<MockGatewayInner>>,
    }

    impl MockGateway {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every later call of this kind fails.
        pub fn reject(&self, kind: CommandKind) {
            self.inner.borrow_mut().rejected.push(kind);
        }

        pub fn calls(&self) -> Vec<Command> {
            self.inner
                .borrow()
                .calls
                .iter()
                .map(|(_, command)| command.clone())
                .collect()
        }

        pub fn calls_of(&self, kind: CommandKind) -> Vec<Command> {
            self.calls()
                .into_iter()
                .filter(|command| command.kind() == kind)
                .collect()
        }

        /// Request id of the most recent call of `kind`.
        pub fn last_id(&self, kind: CommandKind) -> Option<RequestId> {
            self.inner
                .borrow()
                .calls
                .iter()
                .rev()
                .find(|(_, command)| command.kind() == kind)
                .map(|(id, _)| *id)
        }

        /// Queues a response for the next poll.
        pub fn respond(
            &self,
            request_id: RequestId,
            kind: CommandKind,
            result: Result<Reply, CommandError>,
        ) {
            self.inner
                .borrow_mut()
                .pending
                .push_back(Response::new(request_id, kind, result));
        }

        pub fn clear_calls(&self) {
            self.inner.borrow_mut().calls.clear();
        }
    }

    impl Gateway for MockGateway {
        fn invoke(&mut self, command: Command) -> RequestId {
            let mut inner = self.inner.borrow_mut();
            inner.next_id += 1;
            let request_id = inner.next_id;
            let kind = command.kind();
            inner.calls.push((request_id, command));

            if inner.rejected.contains(&kind) {
                inner.pending.push_back(Response::new(
                    request_id,
                    kind,
                    Err(CommandError::Clipboard("mock rejection".to_string())),
                ));
            }
            request_id
        }

        fn poll_responses(&mut self) -> Vec<Response> {
            self.inner.borrow_mut().pending.drain(..).collect()
        }
    }

    /// Window that counts hide/show calls.
    #[derive(Debug)]
    pub struct RecordingWindow {
        pub visible: bool,
        pub hide_calls: usize,
        pub show_calls: usize,
    }

    impl Default for RecordingWindow {
        fn default() -> Self {
            Self {
                visible: true,
                hide_calls: 0,
                show_calls: 0,
            }
        }
    }

    impl WindowControl for RecordingWindow {
        fn hide(&mut self) {
            self.visible = false;
            self.hide_calls += 1;
        }

        fn show(&mut self) {
            self.visible = true;
            self.show_calls += 1;
        }

        fn is_visible(&self) -> bool {
            self.visible
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeClipboardState {
        pub current: Option<String>,
        pub writes: Vec<String>,
        pub fail_reads: bool,
        pub fail_writes: bool,
    }

    /// In-memory clipboard. Clones share state.
    #[derive(Debug, Clone, Default)]
    pub struct FakeClipboard {
        pub state: Arc<Mutex<FakeClipboardState>>,
    }

    impl FakeClipboard {
        pub fn new() -> Self {
            Self::default()
        }

        /// Simulates another application copying `text`.
        pub fn copy_externally(&self, text: &str) {
            self.state.lock().unwrap().current = Some(text.to_string());
        }

        pub fn writes(&self) -> Vec<String> {
            self.state.lock().unwrap().writes.clone()
        }

        pub fn set_fail_writes(&self, fail: bool) {
            self.state.lock().unwrap().fail_writes = fail;
        }

        pub fn set_fail_reads(&self, fail: bool) {
            self.state.lock().unwrap().fail_reads = fail;
        }
    }

    impl ClipboardAccess for FakeClipboard {
        fn read_text(&mut self) -> ClipboardResult<Option<String>> {
            let state = self.state.lock().unwrap();
            if state.fail_reads {
                return Err(ClipboardError::ReadError);
            }
            Ok(state.current.clone())
        }

        fn write_text(&mut self, text: &str) -> ClipboardResult {
            let mut state = self.state.lock().unwrap();
            if state.fail_writes {
                return Err(ClipboardError::WriteError);
            }
            state.writes.push(text.to_string());
            state.current = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeAutostartState {
        pub enabled: bool,
        pub fail: bool,
        pub enables: usize,
        pub disables: usize,
    }

    /// In-memory login item. Clones share state.
    #[derive(Debug, Clone, Default)]
    pub struct FakeAutostart {
        pub state: Arc<Mutex<FakeAutostartState>>,
    }

    impl FakeAutostart {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn enabled(&self) -> bool {
            self.state.lock().unwrap().enabled
        }

        pub fn set_fail(&self, fail: bool) {
            self.state.lock().unwrap().fail = fail;
        }

        /// `(enables, disables)` calls that reached the entry
        pub fn calls(&self) -> (usize, usize) {
            let state = self.state.lock().unwrap();
            (state.enables, state.disables)
        }
    }

    impl AutostartPort for FakeAutostart {
        fn is_enabled(&self) -> Result<bool, ClipdeckError> {
            Ok(self.state.lock().unwrap().enabled)
        }

        fn enable(&self) -> Result<(), ClipdeckError> {
            let mut state = self.state.lock().unwrap();
            if state.fail {
                return Err(ClipdeckError::Io(std::io::Error::other("permission denied")));
            }
            state.enables += 1;
            state.enabled = true;
            Ok(())
        }

        fn disable(&self) -> Result<(), ClipdeckError> {
            let mut state = self.state.lock().unwrap();
            if state.fail {
                return Err(ClipdeckError::Io(std::io::Error::other("permission denied")));
            }
            state.disables += 1;
            state.enabled = false;
            Ok(())
        }
    }

    /// App wired to a mock gateway and a fresh event bus.
    pub fn test_app() -> (App, MockGateway, EventBus) {
        let gateway = MockGateway::new();
        let events = EventBus::new();
        let app = App::new(Box::new(gateway.clone()), &events);
        (app, gateway, events)
    }
}

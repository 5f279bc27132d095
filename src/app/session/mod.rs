//! Editing session host: owns the store and the async runtime, runs effects and
//! feeds remote results back in.

use crate::core::event::Key;
use crate::kernel::quick_open::{self, QuickOpenMatch};
use crate::kernel::services::adapters::{AppMessage, AsyncRuntime, KeybindingService};
use crate::kernel::services::ports::{KeybindingRule, Preferences, RemoteFileApi, Settings};
use crate::kernel::{Action, SessionError, SessionEvent, SessionState, Store};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::time::{Duration, Instant};

mod bridge;
mod input;

pub use bridge::message_to_action;

const MAX_MESSAGE_DRAIN_PER_PUMP: usize = 256;

/// Receives outcome notifications. Every method defaults to doing nothing.
pub trait SessionListener: Send {
    fn on_saved(&mut self, _path: &str) {}
    fn on_save_failed(&mut self, _path: &str, _error: &SessionError) {}
    fn on_file_load_failed(&mut self, _path: &str, _error: &SessionError) {}
    fn on_created(&mut self, _path: &str) {}
    fn on_create_failed(&mut self, _path: &str, _error: &SessionError) {}
    fn on_deleted(&mut self, _path: &str) {}
    fn on_delete_failed(&mut self, _path: &str, _error: &SessionError) {}
    fn on_packed(&mut self) {}
    fn on_pack_failed(&mut self, _error: &SessionError) {}
}

struct NoopListener;

impl SessionListener for NoopListener {}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub preferences: Preferences,
    pub read_only: bool,
    pub keybindings: Vec<KeybindingRule>,
    /// Issue the initial tree load from `EditorSession::new`.
    pub load_tree: bool,
}

impl SessionOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            preferences: settings.preferences.clone(),
            read_only: settings.remote.read_only,
            keybindings: settings.keybindings.clone(),
            load_tree: true,
        }
    }
}

pub struct EditorSession {
    store: Store,
    runtime: AsyncRuntime,
    rx: Receiver<AppMessage>,
    keybindings: KeybindingService,
    listener: Box<dyn SessionListener>,
    /// Requests handed to the runtime whose message has not arrived yet.
    in_flight: usize,
}

impl EditorSession {
    pub fn new(api: Arc<dyn RemoteFileApi>, options: SessionOptions) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let runtime = AsyncRuntime::new(api, tx)?;

        let mut keybindings = KeybindingService::new();
        keybindings.apply_rules(&options.keybindings);

        let state = SessionState::new(options.preferences, options.read_only);
        let mut session = Self {
            store: Store::new(state),
            runtime,
            rx,
            keybindings,
            listener: Box::new(NoopListener),
            in_flight: 0,
        };
        if options.load_tree {
            let _ = session.dispatch(Action::LoadTree);
        }
        Ok(session)
    }

    pub fn set_listener(&mut self, listener: Box<dyn SessionListener>) {
        self.listener = listener;
    }

    pub fn state(&self) -> &SessionState {
        self.store.state()
    }

    pub fn runtime(&self) -> &AsyncRuntime {
        &self.runtime
    }

    pub fn keybindings_mut(&mut self) -> &mut KeybindingService {
        &mut self.keybindings
    }

    /// Dispatches `action` and runs its effects. `Ok(changed)` unless the intent was
    /// refused.
    pub fn dispatch(&mut self, action: Action) -> Result<bool, SessionError> {
        self.dispatch_kernel(action)
    }

    // ==================== Operations ====================

    pub fn load_tree(&mut self) -> Result<bool, SessionError> {
        self.dispatch(Action::LoadTree)
    }

    pub fn open_file(&mut self, path: &str) -> Result<bool, SessionError> {
        self.dispatch(Action::OpenFile(path.to_string()))
    }

    pub fn set_buffer_content(&mut self, path: &str, text: &str) -> Result<bool, SessionError> {
        self.dispatch(Action::SetBufferContent {
            path: path.to_string(),
            text: text.to_string(),
        })
    }

    /// Saves `path`, or the active tab when `None`.
    pub fn save_file(&mut self, path: Option<&str>) -> Result<bool, SessionError> {
        self.dispatch(Action::SaveFile(path.map(str::to_string)))
    }

    pub fn create_file(&mut self, path: &str, content: &str) -> Result<bool, SessionError> {
        self.dispatch(Action::CreateFile {
            path: path.to_string(),
            content: content.to_string(),
        })
    }

    pub fn delete_path(&mut self, path: &str, is_directory: bool) -> Result<bool, SessionError> {
        self.dispatch(Action::DeletePath {
            path: path.to_string(),
            is_directory,
        })
    }

    pub fn close_tab(&mut self, path: &str) -> bool {
        self.dispatch(Action::CloseTab(path.to_string()))
            .unwrap_or(false)
    }

    pub fn close_other_tabs(&mut self, keep: &str) -> bool {
        self.dispatch(Action::CloseOtherTabs(keep.to_string()))
            .unwrap_or(false)
    }

    pub fn close_all_tabs(&mut self) -> bool {
        self.dispatch(Action::CloseAllTabs).unwrap_or(false)
    }

    pub fn toggle_expanded(&mut self, path: &str) -> bool {
        self.dispatch(Action::ToggleExpanded(path.to_string()))
            .unwrap_or(false)
    }

    pub fn pack(&mut self) -> Result<bool, SessionError> {
        self.dispatch(Action::Pack)
    }

    pub fn set_preferences(&mut self, preferences: Preferences) -> bool {
        self.dispatch(Action::SetPreferences(preferences))
            .unwrap_or(false)
    }

    pub fn set_read_only(&mut self, read_only: bool) -> bool {
        self.dispatch(Action::SetReadOnly(read_only))
            .unwrap_or(false)
    }

    /// Ranked matches for `query` over the current tree.
    pub fn quick_open(&self, query: &str) -> Vec<QuickOpenMatch<'_>> {
        let state = self.store.state();
        quick_open::search(&state.tree, &state.recent_paths, query)
    }

    pub fn handle_key(&mut self, key: Key) -> bool {
        input::handle_key(self, key)
    }

    // ==================== Host flags ====================

    pub fn has_unsaved_changes(&self) -> bool {
        self.state().has_unsaved_changes()
    }

    pub fn is_saving(&self) -> bool {
        self.state().is_saving()
    }

    pub fn is_loading_tree(&self) -> bool {
        self.state().is_loading_tree()
    }

    pub fn is_loading_file(&self) -> bool {
        self.state().is_loading_file()
    }

    pub fn is_packing(&self) -> bool {
        self.state().is_packing()
    }

    pub fn tree_error(&self) -> Option<&str> {
        self.state().tree_error.as_deref()
    }

    pub fn modified_paths(&self) -> Vec<&str> {
        self.state().modified_paths()
    }

    /// `true` while any request is awaiting its response.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    // ==================== Message pump ====================

    /// Applies every remote result that has already arrived. Returns whether state changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..MAX_MESSAGE_DRAIN_PER_PUMP {
            match self.rx.try_recv() {
                Ok(msg) => changed |= self.handle_message(msg),
                Err(_) => break,
            }
        }
        changed
    }

    /// Blocks up to `timeout` for one result, then drains whatever else is ready.
    /// Returns `false` when nothing arrived.
    pub fn wait_for_message(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.handle_message(msg);
                self.pump();
                true
            }
            Err(_) => false,
        }
    }

    /// Pumps until no request is in flight or `timeout` elapses. Returns `true` when idle.
    pub fn run_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.pump();
        while self.is_busy() {
            let now = Instant::now();
            if now >= deadline {
                tracing::warn!(in_flight = self.in_flight, "session did not settle in time");
                return false;
            }
            self.wait_for_message(deadline - now);
        }
        true
    }

    pub fn handle_message(&mut self, msg: AppMessage) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        let action = message_to_action(msg);
        self.dispatch_kernel(action).unwrap_or(false)
    }

    fn notify(&mut self, event: SessionEvent) {
        let listener = self.listener.as_mut();
        match &event {
            SessionEvent::Saved { path } => listener.on_saved(path),
            SessionEvent::SaveFailed { path, error } => listener.on_save_failed(path, error),
            SessionEvent::FileLoadFailed { path, error } => {
                listener.on_file_load_failed(path, error)
            }
            SessionEvent::Created { path } => listener.on_created(path),
            SessionEvent::CreateFailed { path, error } => listener.on_create_failed(path, error),
            SessionEvent::Deleted { path } => listener.on_deleted(path),
            SessionEvent::DeleteFailed { path, error } => listener.on_delete_failed(path, error),
            SessionEvent::Packed => listener.on_packed(),
            SessionEvent::PackFailed { error } => listener.on_pack_failed(error),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/session.rs"]
mod tests;

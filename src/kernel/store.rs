use crate::core::Command;

use super::{Action, Effect, SessionError, SessionState};

mod documents;
mod pack;
mod quick_open;
mod tabs;
mod tree;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    /// Set when the intent was refused synchronously; nothing was changed in that case.
    pub rejected: Option<SessionError>,
}

impl DispatchResult {
    pub(crate) fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
            rejected: None,
        }
    }

    pub(crate) fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
            rejected: None,
        }
    }

    pub(crate) fn with_effects(effects: Vec<Effect>, state_changed: bool) -> Self {
        Self {
            effects,
            state_changed,
            rejected: None,
        }
    }

    pub(crate) fn rejected(error: SessionError) -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
            rejected: Some(error),
        }
    }

    pub(crate) fn merge(&mut self, other: DispatchResult) {
        self.effects.extend(other.effects);
        self.state_changed |= other.state_changed;
        if self.rejected.is_none() {
            self.rejected = other.rejected;
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.rejected.is_some()
    }
}

/// Sole owner of a session's state. Every mutation goes through [`Store::dispatch`].
pub struct Store {
    state: SessionState,
}

impl Store {
    pub fn new(state: SessionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::LoadTree
            | Action::TreeLoaded { .. }
            | Action::TreeLoadFailed { .. }
            | Action::ToggleExpanded(_)
            | Action::CreateFile { .. }
            | Action::FileCreated { .. }
            | Action::FileCreateFailed { .. }
            | Action::DeletePath { .. }
            | Action::PathDeleted { .. }
            | Action::PathDeleteFailed { .. } => self.reduce_tree_action(action),
            Action::OpenFile(_)
            | Action::FileLoaded { .. }
            | Action::FileLoadFailed { .. }
            | Action::SetBufferContent { .. }
            | Action::SaveFile(_)
            | Action::FileSaved { .. }
            | Action::FileSaveFailed { .. } => self.reduce_document_action(action),
            Action::CloseTab(_) | Action::CloseOtherTabs(_) | Action::CloseAllTabs => {
                self.reduce_tab_action(action)
            }
            Action::QuickOpenShow
            | Action::QuickOpenHide
            | Action::QuickOpenSetQuery(_)
            | Action::QuickOpenAppend(_)
            | Action::QuickOpenBackspace
            | Action::QuickOpenMoveSelection(_)
            | Action::QuickOpenAccept => self.reduce_quick_open_action(action),
            Action::Pack | Action::Packed | Action::PackFailed { .. } => {
                self.reduce_pack_action(action)
            }
            Action::SetPreferences(preferences) => {
                if self.state.preferences == preferences {
                    return DispatchResult::unchanged();
                }
                self.state.preferences = preferences;
                DispatchResult::changed(true)
            }
            Action::SetReadOnly(read_only) => {
                let changed = self.state.read_only != read_only;
                self.state.read_only = read_only;
                DispatchResult::changed(changed)
            }
        }
    }

    fn dispatch_command(&mut self, command: Command) -> DispatchResult {
        match command {
            Command::QuickOpen => self.dispatch(Action::QuickOpenShow),
            Command::Save => self.dispatch(Action::SaveFile(None)),
            Command::ReloadTree => self.dispatch(Action::LoadTree),
            Command::Pack => self.dispatch(Action::Pack),
            Command::CloseActiveTab => match self.state.active_tab.clone() {
                Some(path) => self.dispatch(Action::CloseTab(path)),
                None => DispatchResult::unchanged(),
            },
            Command::CloseOtherTabs => match self.state.active_tab.clone() {
                Some(path) => self.dispatch(Action::CloseOtherTabs(path)),
                None => DispatchResult::unchanged(),
            },
            Command::CloseAllTabs => self.dispatch(Action::CloseAllTabs),
            Command::Escape => {
                if self.state.quick_open.visible {
                    self.dispatch(Action::QuickOpenHide)
                } else {
                    DispatchResult::unchanged()
                }
            }
            Command::Custom(name) => {
                tracing::debug!(command = %name, "ignoring unknown command");
                DispatchResult::unchanged()
            }
        }
    }

    /// Allocates a fresh tree generation and returns the effect that performs the load.
    fn issue_tree_load(&mut self) -> Effect {
        let generation = self.state.pending.next_generation();
        self.state.pending.tree = Some(generation);
        tracing::debug!(generation, "tree load issued");
        Effect::LoadTree { generation }
    }

    fn ensure_writable(&self, op: &str) -> Result<(), SessionError> {
        if self.state.read_only {
            return Err(SessionError::Permission(op.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;

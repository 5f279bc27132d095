use crate::core::Command;
use crate::kernel::services::ports::Preferences;
use crate::kernel::SessionError;
use crate::models::FileTreeNode;

/// Everything that can change a session: user intents from the views and the host, and
/// completions of remote requests fed back by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RunCommand(Command),

    // ==================== Tree ====================
    LoadTree,
    TreeLoaded {
        generation: u64,
        nodes: Vec<FileTreeNode>,
    },
    TreeLoadFailed {
        generation: u64,
        error: SessionError,
    },
    ToggleExpanded(String),

    // ==================== Documents ====================
    OpenFile(String),
    FileLoaded {
        path: String,
        generation: u64,
        content: String,
    },
    FileLoadFailed {
        path: String,
        generation: u64,
        error: SessionError,
    },
    SetBufferContent {
        path: String,
        text: String,
    },
    /// `None` saves the active tab.
    SaveFile(Option<String>),
    FileSaved {
        path: String,
        content: String,
    },
    FileSaveFailed {
        path: String,
        error: SessionError,
    },

    // ==================== Remote mutations ====================
    CreateFile {
        path: String,
        content: String,
    },
    FileCreated {
        path: String,
        content: String,
    },
    FileCreateFailed {
        path: String,
        error: SessionError,
    },
    DeletePath {
        path: String,
        is_directory: bool,
    },
    PathDeleted {
        path: String,
    },
    PathDeleteFailed {
        path: String,
        error: SessionError,
    },
    Pack,
    Packed,
    PackFailed {
        error: SessionError,
    },

    // ==================== Tabs ====================
    CloseTab(String),
    CloseOtherTabs(String),
    CloseAllTabs,

    // ==================== Quick open ====================
    QuickOpenShow,
    QuickOpenHide,
    QuickOpenSetQuery(String),
    QuickOpenAppend(char),
    QuickOpenBackspace,
    QuickOpenMoveSelection(isize),
    QuickOpenAccept,

    // ==================== Session ====================
    SetPreferences(Preferences),
    SetReadOnly(bool),
}

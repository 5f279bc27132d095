use crate::kernel::SessionError;

/// Outcome notifications surfaced to the host (toasts, confirmation flows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Saved { path: String },
    SaveFailed { path: String, error: SessionError },
    FileLoadFailed { path: String, error: SessionError },
    Created { path: String },
    CreateFailed { path: String, error: SessionError },
    Deleted { path: String },
    DeleteFailed { path: String, error: SessionError },
    Packed,
    PackFailed { error: SessionError },
}

/// Work the store asks the host to perform after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadTree {
        generation: u64,
    },
    LoadFile {
        path: String,
        generation: u64,
    },
    WriteFile {
        path: String,
        content: String,
    },
    CreateFile {
        path: String,
        content: String,
    },
    DeletePath {
        path: String,
        is_directory: bool,
    },
    Pack,
    Notify(SessionEvent),
}

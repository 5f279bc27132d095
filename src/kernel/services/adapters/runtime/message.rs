use crate::kernel::services::ports::RemoteError;
use crate::models::FileTreeNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    WriteFile,
    CreateFile,
    DeletePath,
}

impl FsOp {
    pub fn as_str(self) -> &'static str {
        match self {
            FsOp::WriteFile => "write_file",
            FsOp::CreateFile => "create_file",
            FsOp::DeletePath => "delete_path",
        }
    }
}

#[derive(Debug)]
pub enum AppMessage {
    TreeLoaded {
        generation: u64,
        nodes: Vec<FileTreeNode>,
    },
    TreeLoadError {
        generation: u64,
        error: RemoteError,
    },
    FileLoaded {
        path: String,
        generation: u64,
        content: String,
    },
    FileError {
        path: String,
        generation: u64,
        error: RemoteError,
    },
    FileSaved {
        path: String,
        content: String,
    },
    PathCreated {
        path: String,
        content: String,
    },
    PathDeleted {
        path: String,
    },
    FsOpError {
        op: FsOp,
        path: String,
        error: RemoteError,
    },
    Packed,
    PackError {
        error: RemoteError,
    },
}

use async_trait::async_trait;
use thiserror::Error;

use crate::models::FileTreeNode;

pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    Conflict(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// The remote file store backing an editing session.
///
/// Paths are '/'-joined and relative to the store's root. Implementations must be
/// callable concurrently; ordering of responses is not guaranteed.
#[async_trait]
pub trait RemoteFileApi: Send + Sync {
    async fn list_tree(&self) -> RemoteResult<Vec<FileTreeNode>>;

    async fn read_file(&self, path: &str) -> RemoteResult<String>;

    async fn write_file(&self, path: &str, content: &str) -> RemoteResult<()>;

    /// Fails with [`RemoteError::Conflict`] when `path` already exists.
    async fn create_file(&self, path: &str, content: &str) -> RemoteResult<()>;

    async fn delete_path(&self, path: &str, is_directory: bool) -> RemoteResult<()>;

    async fn pack(&self) -> RemoteResult<()>;
}

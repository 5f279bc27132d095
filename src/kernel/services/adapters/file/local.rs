//! Local directory provider
//!
//! Serves the remote file API from a directory on disk. Used by the headless
//! binary and by end-to-end tests.

use crate::kernel::services::ports::{RemoteError, RemoteFileApi, RemoteResult};
use crate::models::FileTreeNode;
use async_trait::async_trait;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const IGNORED_NAMES: &[&str] = &[
    ".DS_Store",
    ".Spotlight-V100",
    ".Trashes",
    ".fseventsd",
    ".TemporaryItems",
    "Thumbs.db",
    "desktop.ini",
    ".git",
    "node_modules",
];

pub fn should_ignore(name: &str) -> bool {
    IGNORED_NAMES.contains(&name)
}

pub struct LocalRemoteFileApi {
    root: PathBuf,
}

impl LocalRemoteFileApi {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> RemoteResult<PathBuf> {
        if path.is_empty() || path.starts_with('/') || path.contains('\\') {
            return Err(RemoteError::InvalidPath(path.to_string()));
        }
        let mut out = self.root.clone();
        for segment in path.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(RemoteError::InvalidPath(path.to_string()));
            }
            out.push(segment);
        }
        Ok(out)
    }
}

#[async_trait]
impl RemoteFileApi for LocalRemoteFileApi {
    async fn list_tree(&self) -> RemoteResult<Vec<FileTreeNode>> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || read_tree(&root, ""))
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?
    }

    async fn read_file(&self, path: &str) -> RemoteResult<String> {
        let full = self.resolve(path)?;
        if tokio::fs::metadata(&full)
            .await
            .map_err(|e| io_error(path, e))?
            .is_dir()
        {
            return Err(RemoteError::InvalidPath(path.to_string()));
        }
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|e| io_error(path, e))
    }

    async fn write_file(&self, path: &str, content: &str) -> RemoteResult<()> {
        let full = self.resolve(path)?;
        let meta = tokio::fs::metadata(&full)
            .await
            .map_err(|e| io_error(path, e))?;
        if meta.is_dir() {
            return Err(RemoteError::InvalidPath(path.to_string()));
        }
        tokio::fs::write(&full, content)
            .await
            .map_err(|e| io_error(path, e))
    }

    async fn create_file(&self, path: &str, content: &str) -> RemoteResult<()> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(path, e))?;
        }
        let content = content.to_string();
        let label = path.to_string();
        tokio::task::spawn_blocking(move || {
            use std::io::Write;
            let mut file = fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&full)
                .map_err(|e| io_error(&label, e))?;
            file.write_all(content.as_bytes())
                .map_err(|e| io_error(&label, e))
        })
        .await
        .map_err(|e| RemoteError::Transport(e.to_string()))?
    }

    async fn delete_path(&self, path: &str, is_directory: bool) -> RemoteResult<()> {
        let full = self.resolve(path)?;
        let meta = tokio::fs::metadata(&full)
            .await
            .map_err(|e| io_error(path, e))?;
        if meta.is_dir() != is_directory {
            return Err(RemoteError::InvalidPath(path.to_string()));
        }
        let result = if is_directory {
            tokio::fs::remove_dir_all(&full).await
        } else {
            tokio::fs::remove_file(&full).await
        };
        result.map_err(|e| io_error(path, e))
    }

    async fn pack(&self) -> RemoteResult<()> {
        tracing::info!(root = %self.root.display(), "Pack requested; local directories have nothing to build");
        Ok(())
    }
}

fn io_error(path: &str, e: io::Error) -> RemoteError {
    match e.kind() {
        io::ErrorKind::NotFound => RemoteError::NotFound(path.to_string()),
        io::ErrorKind::AlreadyExists => RemoteError::Conflict(path.to_string()),
        io::ErrorKind::PermissionDenied => RemoteError::Forbidden(path.to_string()),
        _ => RemoteError::Transport(format!("{path}: {e}")),
    }
}

fn read_tree(dir: &Path, prefix: &str) -> RemoteResult<Vec<FileTreeNode>> {
    let label = if prefix.is_empty() { "." } else { prefix };
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| io_error(label, e))? {
        let entry = entry.map_err(|e| io_error(label, e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if should_ignore(&name) {
            continue;
        }
        let is_dir = entry
            .file_type()
            .map_err(|e| io_error(label, e))?
            .is_dir();
        entries.push((name, is_dir, entry.path()));
    }

    entries.sort_by(|a, b| match (a.1, b.1) {
        (true, false) => std::cmp::Ordering::Less,
        (false, true) => std::cmp::Ordering::Greater,
        _ => a.0.to_lowercase().cmp(&b.0.to_lowercase()),
    });

    let mut nodes = Vec::with_capacity(entries.len());
    for (name, is_dir, full) in entries {
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };
        if is_dir {
            let children = read_tree(&full, &path)?;
            nodes.push(FileTreeNode::directory(path, children));
        } else {
            nodes.push(FileTreeNode::file(path));
        }
    }
    Ok(nodes)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;

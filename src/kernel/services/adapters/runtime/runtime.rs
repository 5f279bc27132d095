use super::message::{AppMessage, FsOp};
use crate::kernel::services::ports::RemoteFileApi;
use std::io;
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Runs remote requests off the host thread. Every request reports exactly one
/// [`AppMessage`]; responses arrive in completion order, not issue order.
pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
    api: Arc<dyn RemoteFileApi>,
    tx: Sender<AppMessage>,
}

impl AsyncRuntime {
    pub fn new(api: Arc<dyn RemoteFileApi>, tx: Sender<AppMessage>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("pkgcode-io")
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime, api, tx })
    }

    pub fn load_tree(&self, generation: u64) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = match api.list_tree().await {
                Ok(nodes) => AppMessage::TreeLoaded { generation, nodes },
                Err(error) => AppMessage::TreeLoadError { generation, error },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn load_file(&self, path: String, generation: u64) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = match api.read_file(&path).await {
                Ok(content) => AppMessage::FileLoaded {
                    path,
                    generation,
                    content,
                },
                Err(error) => AppMessage::FileError {
                    path,
                    generation,
                    error,
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn write_file(&self, path: String, content: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = match api.write_file(&path, &content).await {
                Ok(()) => AppMessage::FileSaved { path, content },
                Err(error) => AppMessage::FsOpError {
                    op: FsOp::WriteFile,
                    path,
                    error,
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn create_file(&self, path: String, content: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = match api.create_file(&path, &content).await {
                Ok(()) => AppMessage::PathCreated { path, content },
                Err(error) => AppMessage::FsOpError {
                    op: FsOp::CreateFile,
                    path,
                    error,
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn delete_path(&self, path: String, is_directory: bool) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = match api.delete_path(&path, is_directory).await {
                Ok(()) => AppMessage::PathDeleted { path },
                Err(error) => AppMessage::FsOpError {
                    op: FsOp::DeletePath,
                    path,
                    error,
                },
            };
            let _ = tx.send(msg);
        });
    }

    pub fn pack(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = match api.pack().await {
                Ok(()) => AppMessage::Packed,
                Err(error) => AppMessage::PackError { error },
            };
            let _ = tx.send(msg);
        });
    }
}

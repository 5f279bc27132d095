use super::EditorSession;
use crate::kernel::services::adapters::{AppMessage, FsOp};
use crate::kernel::{Action, Effect, SessionError, SessionEvent};

impl EditorSession {
    pub(super) fn dispatch_kernel(&mut self, action: Action) -> Result<bool, SessionError> {
        let result = self.store.dispatch(action);
        if let Some(error) = result.rejected {
            tracing::debug!(error = %error, "intent rejected");
            return Err(error);
        }
        for effect in result.effects {
            self.run_effect(effect);
        }
        Ok(result.state_changed)
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::LoadTree { generation } => {
                self.in_flight += 1;
                self.runtime.load_tree(generation);
            }
            Effect::LoadFile { path, generation } => {
                self.in_flight += 1;
                self.runtime.load_file(path, generation);
            }
            Effect::WriteFile { path, content } => {
                self.in_flight += 1;
                self.runtime.write_file(path, content);
            }
            Effect::CreateFile { path, content } => {
                self.in_flight += 1;
                self.runtime.create_file(path, content);
            }
            Effect::DeletePath { path, is_directory } => {
                self.in_flight += 1;
                self.runtime.delete_path(path, is_directory);
            }
            Effect::Pack => {
                self.in_flight += 1;
                self.runtime.pack();
            }
            Effect::Notify(event) => {
                log_event(&event);
                self.notify(event);
            }
        }
    }
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::Saved { path } => tracing::info!(path = %path, "saved"),
        SessionEvent::Created { path } => tracing::info!(path = %path, "created"),
        SessionEvent::Deleted { path } => tracing::info!(path = %path, "deleted"),
        SessionEvent::Packed => tracing::info!("packed"),
        SessionEvent::SaveFailed { path, error }
        | SessionEvent::FileLoadFailed { path, error }
        | SessionEvent::CreateFailed { path, error }
        | SessionEvent::DeleteFailed { path, error } => {
            tracing::warn!(path = %path, error = %error, "remote operation failed");
        }
        SessionEvent::PackFailed { error } => tracing::warn!(error = %error, "pack failed"),
    }
}

/// Converts a runtime result into the store action that applies it.
pub fn message_to_action(msg: AppMessage) -> Action {
    match msg {
        AppMessage::TreeLoaded { generation, nodes } => Action::TreeLoaded { generation, nodes },
        AppMessage::TreeLoadError { generation, error } => Action::TreeLoadFailed {
            generation,
            error: error.into(),
        },
        AppMessage::FileLoaded {
            path,
            generation,
            content,
        } => Action::FileLoaded {
            path,
            generation,
            content,
        },
        AppMessage::FileError {
            path,
            generation,
            error,
        } => Action::FileLoadFailed {
            path,
            generation,
            error: error.into(),
        },
        AppMessage::FileSaved { path, content } => Action::FileSaved { path, content },
        AppMessage::PathCreated { path, content } => Action::FileCreated { path, content },
        AppMessage::PathDeleted { path } => Action::PathDeleted { path },
        AppMessage::FsOpError { op, path, error } => {
            tracing::debug!(op = op.as_str(), path = %path, error = %error, "fs op failed");
            let error: SessionError = error.into();
            match op {
                FsOp::WriteFile => Action::FileSaveFailed { path, error },
                FsOp::CreateFile => Action::FileCreateFailed { path, error },
                FsOp::DeletePath => Action::PathDeleteFailed { path, error },
            }
        }
        AppMessage::Packed => Action::Packed,
        AppMessage::PackError { error } => Action::PackFailed {
            error: error.into(),
        },
    }
}

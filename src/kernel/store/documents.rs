use crate::kernel::effect::SessionEvent;
use crate::kernel::{Action, Effect, OpenDocument, SessionError};

impl super::Store {
    pub(super) fn reduce_document_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::OpenFile(path) => self.open_file(path),
            Action::FileLoaded {
                path,
                generation,
                content,
            } => {
                if !self.take_file_generation(&path, generation) {
                    tracing::debug!(path = %path, generation, "discarding stale file response");
                    return super::DispatchResult::unchanged();
                }

                match self.state.documents.get_mut(&path) {
                    Some(doc) if doc.is_loading() => {
                        *doc = OpenDocument::loaded(doc.id, path, content);
                        super::DispatchResult::changed(true)
                    }
                    _ => super::DispatchResult::unchanged(),
                }
            }
            Action::FileLoadFailed {
                path,
                generation,
                error,
            } => {
                if !self.take_file_generation(&path, generation) {
                    tracing::debug!(path = %path, generation, "discarding stale file failure");
                    return super::DispatchResult::unchanged();
                }

                let loading = self
                    .state
                    .documents
                    .get(&path)
                    .is_some_and(OpenDocument::is_loading);
                if !loading {
                    return super::DispatchResult::unchanged();
                }

                tracing::warn!(path = %path, error = %error, "file load failed");
                self.discard_tab(&path);
                super::DispatchResult::with_effects(
                    vec![Effect::Notify(SessionEvent::FileLoadFailed { path, error })],
                    true,
                )
            }
            Action::SetBufferContent { path, text } => {
                if let Err(err) = self.ensure_writable("edit") {
                    return super::DispatchResult::rejected(err);
                }
                let Some(doc) = self.state.documents.get_mut(&path) else {
                    return super::DispatchResult::rejected(SessionError::NotFound(path));
                };
                if doc.is_loading() {
                    return super::DispatchResult::rejected(SessionError::DocumentLoading(path));
                }
                if doc.buffer_content == text {
                    return super::DispatchResult::unchanged();
                }

                doc.buffer_content = text;
                doc.refresh_dirty();
                super::DispatchResult::changed(true)
            }
            Action::SaveFile(path) => {
                let Some(path) = path.or_else(|| self.state.active_tab.clone()) else {
                    return super::DispatchResult::unchanged();
                };
                self.save_file(path)
            }
            Action::FileSaved { path, content } => {
                let writer = self.state.pending.saving.remove(&path);

                match self.state.documents.get_mut(&path) {
                    Some(doc) if Some(doc.id) == writer && !doc.is_loading() => {
                        doc.saved_content = Some(content);
                        doc.refresh_dirty();
                    }
                    _ => tracing::debug!(path = %path, "save completed for a closed document"),
                }

                tracing::info!(path = %path, "saved");
                let mut result = super::DispatchResult::with_effects(
                    vec![Effect::Notify(SessionEvent::Saved { path: path.clone() })],
                    true,
                );
                result.merge(self.resume_queued_save(&path));
                result
            }
            Action::FileSaveFailed { path, error } => {
                self.state.pending.saving.remove(&path);
                tracing::warn!(path = %path, error = %error, "save failed");

                let mut result = super::DispatchResult::with_effects(
                    vec![Effect::Notify(SessionEvent::SaveFailed {
                        path: path.clone(),
                        error,
                    })],
                    true,
                );
                result.merge(self.resume_queued_save(&path));
                result
            }
            _ => unreachable!("non-document action passed to reduce_document_action"),
        }
    }

    fn open_file(&mut self, path: String) -> super::DispatchResult {
        if self.state.documents.contains_key(&path) {
            let mut changed = self.state.active_tab.as_deref() != Some(path.as_str());
            if !self.state.tabs.contains(&path) {
                self.state.tabs.push(path.clone());
                changed = true;
            }
            changed |= self.state.push_recent(&path);
            self.state.active_tab = Some(path);
            return super::DispatchResult::changed(changed);
        }

        if self.state.find_node(&path).is_some_and(|n| n.is_dir()) {
            return super::DispatchResult::rejected(SessionError::Validation(format!(
                "{path} is a directory"
            )));
        }

        let id = self.state.pending.next_document_id();
        let generation = self.state.pending.next_generation();
        self.state.pending.files.insert(path.clone(), generation);
        self.state
            .documents
            .insert(path.clone(), OpenDocument::loading(id, path.clone()));
        if !self.state.tabs.contains(&path) {
            self.state.tabs.push(path.clone());
        }
        self.state.active_tab = Some(path.clone());
        self.state.push_recent(&path);

        tracing::debug!(path = %path, generation, "file load issued");
        super::DispatchResult::with_effects(vec![Effect::LoadFile { path, generation }], true)
    }

    fn save_file(&mut self, path: String) -> super::DispatchResult {
        if let Err(err) = self.ensure_writable("save") {
            return super::DispatchResult::rejected(err);
        }
        let Some(doc) = self.state.documents.get(&path) else {
            return super::DispatchResult::rejected(SessionError::NotFound(path));
        };
        if !doc.is_dirty {
            return super::DispatchResult::unchanged();
        }

        if self.state.pending.saving.contains_key(&path) {
            tracing::debug!(path = %path, "save queued behind in-flight write");
            self.state.pending.queued_saves.insert(path);
            return super::DispatchResult::unchanged();
        }

        let content = doc.buffer_content.clone();
        self.state.pending.saving.insert(path.clone(), doc.id);
        tracing::debug!(path = %path, bytes = content.len(), "save issued");
        super::DispatchResult::with_effects(vec![Effect::WriteFile { path, content }], true)
    }

    fn resume_queued_save(&mut self, path: &str) -> super::DispatchResult {
        if !self.state.pending.queued_saves.remove(path) {
            return super::DispatchResult::unchanged();
        }
        if !self.state.documents.contains_key(path) {
            return super::DispatchResult::unchanged();
        }
        let mut result = self.save_file(path.to_string());
        // A rejection here has no caller to report to.
        result.rejected = None;
        result
    }

    /// Returns `true` when `generation` is the latest load issued for `path`, consuming it.
    fn take_file_generation(&mut self, path: &str, generation: u64) -> bool {
        if self.state.pending.files.get(path) != Some(&generation) {
            return false;
        }
        self.state.pending.files.remove(path);
        true
    }
}

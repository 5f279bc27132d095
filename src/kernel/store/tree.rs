use crate::kernel::effect::SessionEvent;
use crate::kernel::error::validate_path;
use crate::kernel::{Action, Effect, OpenDocument, SessionError};
use crate::models::file_tree::{self, is_same_or_descendant};
use crate::models::{FileTreeNode, NodeKind};

impl super::Store {
    pub(super) fn reduce_tree_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::LoadTree => {
                let effect = self.issue_tree_load();
                super::DispatchResult::with_effects(vec![effect], true)
            }
            Action::TreeLoaded { generation, nodes } => {
                if self.state.pending.tree != Some(generation) {
                    tracing::debug!(generation, "discarding stale tree response");
                    return super::DispatchResult::unchanged();
                }

                self.state.pending.tree = None;
                self.state.tree = nodes;
                self.state.tree_error = None;

                let tree = &self.state.tree;
                self.state
                    .expanded_paths
                    .retain(|path| file_tree::find(tree, path).is_some_and(|n| n.is_dir()));

                tracing::debug!(
                    generation,
                    nodes = file_tree::count_nodes(&self.state.tree),
                    "tree loaded"
                );
                super::DispatchResult::changed(true)
            }
            Action::TreeLoadFailed { generation, error } => {
                if self.state.pending.tree != Some(generation) {
                    tracing::debug!(generation, "discarding stale tree failure");
                    return super::DispatchResult::unchanged();
                }

                tracing::warn!(generation, error = %error, "tree load failed");
                self.state.pending.tree = None;
                self.state.tree_error = Some(error.to_string());
                super::DispatchResult::changed(true)
            }
            Action::ToggleExpanded(path) => {
                let is_dir = self.state.find_node(&path).is_some_and(|n| n.is_dir());
                if !is_dir {
                    return super::DispatchResult::unchanged();
                }

                if !self.state.expanded_paths.remove(&path) {
                    self.state.expanded_paths.insert(path);
                }
                super::DispatchResult::changed(true)
            }
            Action::CreateFile { path, content } => {
                if let Err(err) = self.check_create(&path) {
                    return super::DispatchResult::rejected(err);
                }

                self.state.pending.creating.insert(path.clone());
                tracing::info!(path = %path, "creating file");
                super::DispatchResult::with_effects(
                    vec![Effect::CreateFile { path, content }],
                    false,
                )
            }
            Action::FileCreated { path, content } => {
                self.state.pending.creating.remove(&path);

                if let Err(err) = file_tree::insert(&mut self.state.tree, FileTreeNode::file(&path))
                {
                    // The next tree load reconciles whatever we could not place.
                    tracing::debug!(path = %path, error = %err, "optimistic insert skipped");
                }
                for dir in file_tree::ancestors(&path) {
                    self.state.expanded_paths.insert(dir.to_string());
                }

                // A placeholder from an earlier open of the missing path is replaced, and its
                // pending fetch forgotten so a late NotFound cannot close the new tab.
                let keep_existing = self
                    .state
                    .documents
                    .get(&path)
                    .is_some_and(|doc| !doc.is_loading());
                if !keep_existing {
                    let id = self.state.pending.next_document_id();
                    self.state.pending.files.remove(&path);
                    let doc = OpenDocument::loaded(id, path.clone(), content);
                    self.state.documents.insert(path.clone(), doc);
                }
                if !self.state.tabs.contains(&path) {
                    self.state.tabs.push(path.clone());
                }
                self.state.active_tab = Some(path.clone());
                self.state.push_recent(&path);

                let reload = self.issue_tree_load();
                super::DispatchResult::with_effects(
                    vec![Effect::Notify(SessionEvent::Created { path }), reload],
                    true,
                )
            }
            Action::FileCreateFailed { path, error } => {
                self.state.pending.creating.remove(&path);
                tracing::warn!(path = %path, error = %error, "create failed");
                super::DispatchResult::with_effects(
                    vec![Effect::Notify(SessionEvent::CreateFailed { path, error })],
                    false,
                )
            }
            Action::DeletePath { path, is_directory } => {
                if let Err(err) = self.ensure_writable("delete") {
                    return super::DispatchResult::rejected(err);
                }
                if self.state.find_node(&path).is_none() {
                    return super::DispatchResult::rejected(SessionError::NotFound(path));
                }
                if !self.state.pending.deleting.insert(path.clone()) {
                    return super::DispatchResult::unchanged();
                }

                tracing::info!(path = %path, is_directory, "deleting path");
                super::DispatchResult::with_effects(
                    vec![Effect::DeletePath { path, is_directory }],
                    false,
                )
            }
            Action::PathDeleted { path } => {
                self.state.pending.deleting.remove(&path);
                file_tree::remove(&mut self.state.tree, &path);

                let doomed: Vec<String> = self
                    .state
                    .tabs
                    .iter()
                    .filter(|tab| is_same_or_descendant(tab, &path))
                    .cloned()
                    .collect();
                for tab in &doomed {
                    self.discard_tab(tab);
                }
                self.state
                    .expanded_paths
                    .retain(|p| !is_same_or_descendant(p, &path));
                self.state
                    .recent_paths
                    .retain(|p| !is_same_or_descendant(p, &path));

                let reload = self.issue_tree_load();
                super::DispatchResult::with_effects(
                    vec![Effect::Notify(SessionEvent::Deleted { path }), reload],
                    true,
                )
            }
            Action::PathDeleteFailed { path, error } => {
                self.state.pending.deleting.remove(&path);
                tracing::warn!(path = %path, error = %error, "delete failed");
                super::DispatchResult::with_effects(
                    vec![Effect::Notify(SessionEvent::DeleteFailed { path, error })],
                    false,
                )
            }
            _ => unreachable!("non-tree action passed to reduce_tree_action"),
        }
    }

    fn check_create(&self, path: &str) -> Result<(), SessionError> {
        self.ensure_writable("create")?;
        validate_path(path)?;

        if self.state.find_node(path).is_some() || self.state.pending.creating.contains(path) {
            return Err(SessionError::Conflict(path.to_string()));
        }
        for dir in file_tree::ancestors(path) {
            if let Some(node) = self.state.find_node(dir) {
                if node.kind == NodeKind::File {
                    return Err(SessionError::Validation(format!("{dir} is not a directory")));
                }
            }
        }
        Ok(())
    }
}

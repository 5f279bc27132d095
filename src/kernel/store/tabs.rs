use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_tab_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::CloseTab(path) => super::DispatchResult::changed(self.discard_tab(&path)),
            Action::CloseOtherTabs(keep) => {
                let others: Vec<String> = self
                    .state
                    .tabs
                    .iter()
                    .filter(|tab| **tab != keep)
                    .cloned()
                    .collect();

                let mut changed = false;
                for tab in &others {
                    changed |= self.discard_tab(tab);
                }

                let next_active = self.state.tabs.contains(&keep).then_some(keep);
                changed |= self.state.active_tab != next_active;
                self.state.active_tab = next_active;
                super::DispatchResult::changed(changed)
            }
            Action::CloseAllTabs => {
                let all = std::mem::take(&mut self.state.tabs);
                let changed = !all.is_empty();
                for tab in &all {
                    self.forget_document(tab);
                }
                self.state.active_tab = None;
                super::DispatchResult::changed(changed)
            }
            _ => unreachable!("non-tab action passed to reduce_tab_action"),
        }
    }

    /// Closes the tab for `path` and drops its document, unsaved edits included.
    ///
    /// If the tab was active, focus moves to its left neighbour, or to the new first tab
    /// when it was leftmost.
    pub(super) fn discard_tab(&mut self, path: &str) -> bool {
        let Some(index) = self.state.tabs.iter().position(|tab| tab == path) else {
            return self.forget_document(path);
        };

        self.state.tabs.remove(index);
        self.forget_document(path);

        if self.state.active_tab.as_deref() == Some(path) {
            let next = if index > 0 {
                self.state.tabs.get(index - 1)
            } else {
                self.state.tabs.first()
            };
            self.state.active_tab = next.cloned();
        }
        true
    }

    /// Drops the document and any request bookkeeping that would otherwise resurrect it.
    /// An in-flight write keeps its `saving` entry so a reopened document cannot overlap it.
    fn forget_document(&mut self, path: &str) -> bool {
        self.state.pending.files.remove(path);
        self.state.pending.queued_saves.remove(path);
        self.state.documents.remove(path).is_some()
    }
}

use crate::kernel::quick_open;
use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_quick_open_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::QuickOpenShow => {
                let prev = self.state.quick_open.clone();
                self.state.quick_open.reset();
                self.state.quick_open.visible = true;
                super::DispatchResult::changed(self.state.quick_open != prev)
            }
            Action::QuickOpenHide => {
                if !self.state.quick_open.visible {
                    return super::DispatchResult::unchanged();
                }
                self.state.quick_open.reset();
                super::DispatchResult::changed(true)
            }
            Action::QuickOpenSetQuery(query) => {
                if self.state.quick_open.query == query {
                    return super::DispatchResult::unchanged();
                }
                self.state.quick_open.query = query;
                self.state.quick_open.selected = 0;
                super::DispatchResult::changed(true)
            }
            Action::QuickOpenAppend(ch) => {
                self.state.quick_open.query.push(ch);
                self.state.quick_open.selected = 0;
                super::DispatchResult::changed(true)
            }
            Action::QuickOpenBackspace => {
                if self.state.quick_open.query.pop().is_none() {
                    return super::DispatchResult::unchanged();
                }
                self.state.quick_open.selected = 0;
                super::DispatchResult::changed(true)
            }
            Action::QuickOpenMoveSelection(delta) => {
                if !self.state.quick_open.visible || delta == 0 {
                    return super::DispatchResult::unchanged();
                }

                let len = quick_open::match_count(
                    &self.state.tree,
                    &self.state.recent_paths,
                    &self.state.quick_open.query,
                );
                if len == 0 {
                    return super::DispatchResult::unchanged();
                }

                let current = self.state.quick_open.selected.min(len - 1);
                let step = delta.rem_euclid(len as isize) as usize;
                let next = (current + step) % len;
                let changed = next != self.state.quick_open.selected;
                self.state.quick_open.selected = next;
                super::DispatchResult::changed(changed)
            }
            Action::QuickOpenAccept => {
                if !self.state.quick_open.visible {
                    return super::DispatchResult::unchanged();
                }

                let matches = quick_open::search(
                    &self.state.tree,
                    &self.state.recent_paths,
                    &self.state.quick_open.query,
                );
                // The tree may have shrunk since the selection was made.
                let selected = self
                    .state
                    .quick_open
                    .selected
                    .min(matches.len().saturating_sub(1));
                let path = matches.get(selected).map(|m| m.path.to_string());

                self.state.quick_open.reset();

                let Some(path) = path else {
                    return super::DispatchResult::changed(true);
                };

                let mut result = self.dispatch(Action::OpenFile(path));
                result.state_changed = true;
                result
            }
            _ => unreachable!("non-quick-open action passed to reduce_quick_open_action"),
        }
    }
}

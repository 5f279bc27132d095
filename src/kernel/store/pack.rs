use crate::kernel::effect::SessionEvent;
use crate::kernel::{Action, Effect, SessionError};

impl super::Store {
    pub(super) fn reduce_pack_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::Pack => {
                if let Err(err) = self.ensure_writable("pack") {
                    return super::DispatchResult::rejected(err);
                }
                if self.state.has_unsaved_changes() {
                    tracing::info!(
                        modified = self.state.modified_paths().len(),
                        "pack refused: unsaved changes"
                    );
                    return super::DispatchResult::rejected(SessionError::UnsavedChanges);
                }
                if self.state.pending.packing {
                    return super::DispatchResult::unchanged();
                }

                self.state.pending.packing = true;
                super::DispatchResult::with_effects(vec![Effect::Pack], true)
            }
            Action::Packed => {
                self.state.pending.packing = false;
                super::DispatchResult::with_effects(
                    vec![Effect::Notify(SessionEvent::Packed)],
                    true,
                )
            }
            Action::PackFailed { error } => {
                self.state.pending.packing = false;
                tracing::warn!(error = %error, "pack failed");
                super::DispatchResult::with_effects(
                    vec![Effect::Notify(SessionEvent::PackFailed { error })],
                    true,
                )
            }
            _ => unreachable!("non-pack action passed to reduce_pack_action"),
        }
    }
}

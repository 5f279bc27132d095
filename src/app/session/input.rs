use super::EditorSession;
use crate::core::event::{Key, KeyCode};
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::Action;

/// Routes a key chord: bound commands first, then palette editing while quick-open is
/// visible. Returns whether the key was consumed.
pub(super) fn handle_key(session: &mut EditorSession, key: Key) -> bool {
    let palette_visible = session.state().quick_open.visible;
    let context = if palette_visible {
        KeybindingContext::QuickOpen
    } else {
        KeybindingContext::Global
    };

    if let Some(command) = session.keybindings.resolve(context, &key).cloned() {
        let _ = session.dispatch(Action::RunCommand(command));
        return true;
    }

    if !palette_visible {
        return false;
    }

    let plain = !key.modifiers.ctrl && !key.modifiers.alt && !key.modifiers.meta;
    let action = match key.code {
        KeyCode::Char(ch) if plain => Action::QuickOpenAppend(ch),
        KeyCode::Backspace => Action::QuickOpenBackspace,
        KeyCode::Up => Action::QuickOpenMoveSelection(-1),
        KeyCode::Down => Action::QuickOpenMoveSelection(1),
        KeyCode::Enter => Action::QuickOpenAccept,
        _ => return false,
    };
    let _ = session.dispatch(action);
    true
}

//! Binding between the active document and the embedded text widget.

use crate::kernel::{Action, LanguageId, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSurface<'a> {
    pub path: &'a str,
    pub value: &'a str,
    pub language: LanguageId,
    pub theme: &'a str,
    pub tab_size: u8,
    pub word_wrap: bool,
    pub read_only: bool,
}

impl<'a> EditorSurface<'a> {
    /// Surface for the active tab; `None` with no active tab or while it is loading.
    pub fn from_state(state: &'a SessionState) -> Option<Self> {
        let doc = state.active_document()?;
        if doc.is_loading() {
            return None;
        }
        let prefs = &state.preferences;
        Some(Self {
            path: &doc.path,
            value: &doc.buffer_content,
            language: LanguageId::from_path(&doc.path),
            theme: &prefs.theme,
            tab_size: prefs.tab_size,
            word_wrap: prefs.word_wrap,
            read_only: state.read_only,
        })
    }

    /// Widget change notification for this surface's document.
    pub fn on_change(&self, text: impl Into<String>) -> Action {
        Action::SetBufferContent {
            path: self.path.to_string(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/editor.rs"]
mod tests;

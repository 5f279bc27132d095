use super::*;
use crate::kernel::OpenDocument;

#[test]
fn no_surface_without_active_tab() {
    let state = SessionState::default();
    assert_eq!(EditorSurface::from_state(&state), None);
}

#[test]
fn no_surface_while_loading() {
    let mut state = SessionState::default();
    state.tabs.push("a.ts".to_string());
    state.active_tab = Some("a.ts".to_string());
    state
        .documents
        .insert("a.ts".to_string(), OpenDocument::loading(1, "a.ts".to_string()));
    assert_eq!(EditorSurface::from_state(&state), None);
}

#[test]
fn surface_reflects_document_and_preferences() {
    let mut state = SessionState::default();
    state.preferences.tab_size = 4;
    state.preferences.word_wrap = true;
    state.read_only = true;
    state.tabs.push("src/app.tsx".to_string());
    state.active_tab = Some("src/app.tsx".to_string());
    state.documents.insert(
        "src/app.tsx".to_string(),
        OpenDocument::loaded(1, "src/app.tsx".to_string(), "let x".to_string()),
    );

    let surface = EditorSurface::from_state(&state).unwrap();
    assert_eq!(surface.path, "src/app.tsx");
    assert_eq!(surface.value, "let x");
    assert_eq!(surface.language, LanguageId::TypeScript);
    assert_eq!(surface.theme, "vs-dark");
    assert_eq!(surface.tab_size, 4);
    assert!(surface.word_wrap);
    assert!(surface.read_only);

    assert_eq!(
        surface.on_change("let y"),
        Action::SetBufferContent {
            path: "src/app.tsx".to_string(),
            text: "let y".to_string()
        }
    );
}

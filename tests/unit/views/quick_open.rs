use super::*;
use crate::models::FileTreeNode;

fn state(files: &[&str]) -> SessionState {
    let mut state = SessionState::default();
    state.tree = files.iter().map(|p| FileTreeNode::file(*p)).collect();
    state
}

#[test]
fn hidden_palette_has_no_view() {
    let state = state(&["a.ts"]);
    assert_eq!(quick_open_view(&state, 10), None);
}

#[test]
fn items_follow_search_order_and_flag_recent() {
    let mut state = state(&["button.ts", "about.ts", "b.ts"]);
    state.recent_paths = vec!["b.ts".to_string()];
    state.quick_open.visible = true;

    let view = quick_open_view(&state, 10).unwrap();
    let paths: Vec<&str> = view.items.iter().map(|i| i.path).collect();
    assert_eq!(paths, vec!["b.ts", "about.ts", "button.ts"]);
    assert!(view.items[0].is_recent);
    assert!(view.items[0].is_selected);
    assert!(!view.items[1].is_recent);
    assert_eq!(view.total, 3);
}

#[test]
fn window_keeps_selection_visible() {
    let mut state = state(&["a1.ts", "a2.ts", "a3.ts", "a4.ts"]);
    state.quick_open.visible = true;
    state.quick_open.selected = 3;

    let view = quick_open_view(&state, 2).unwrap();
    let paths: Vec<&str> = view.items.iter().map(|i| i.path).collect();
    assert_eq!(paths, vec!["a3.ts", "a4.ts"]);
    assert!(view.items[1].is_selected);
}

#[test]
fn no_matches_is_empty() {
    let mut state = state(&["a.ts"]);
    state.quick_open.visible = true;
    state.quick_open.query = "zzz".to_string();
    let view = quick_open_view(&state, 10).unwrap();
    assert!(view.is_empty());
    assert!(view.items.is_empty());
    assert_eq!(view.query, "zzz");
}

use super::*;
use crate::kernel::OpenDocument;

fn sample_state() -> SessionState {
    let mut state = SessionState::default();
    state.tree = vec![
        FileTreeNode::directory(
            "src",
            vec![
                FileTreeNode::directory("src/util", vec![FileTreeNode::file("src/util/str.ts")]),
                FileTreeNode::file("src/index.ts"),
            ],
        ),
        FileTreeNode::file("package.json"),
    ];
    state
}

fn open_dirty(state: &mut SessionState, path: &str) {
    let mut doc = OpenDocument::loaded(1, path.to_string(), "a".to_string());
    doc.buffer_content = "b".to_string();
    doc.refresh_dirty();
    state.documents.insert(path.to_string(), doc);
    state.tabs.push(path.to_string());
}

#[test]
fn collapsed_tree_shows_top_level_only() {
    let state = sample_state();
    let rows = rows(&state);
    let paths: Vec<&str> = rows.iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["src", "package.json"]);
    assert!(rows[0].is_dir());
    assert!(!rows[0].is_expanded);
    assert_eq!(rows[0].depth, 0);
}

#[test]
fn expanded_directories_descend_in_order() {
    let mut state = sample_state();
    state.expanded_paths.insert("src".to_string());
    state.expanded_paths.insert("src/util".to_string());

    let rows = rows(&state);
    let listing: Vec<(&str, u16)> = rows.iter().map(|r| (r.path, r.depth)).collect();
    assert_eq!(
        listing,
        vec![
            ("src", 0),
            ("src/util", 1),
            ("src/util/str.ts", 2),
            ("src/index.ts", 1),
            ("package.json", 0),
        ]
    );
}

#[test]
fn selection_and_dirty_markers() {
    let mut state = sample_state();
    state.expanded_paths.insert("src".to_string());
    open_dirty(&mut state, "src/index.ts");
    state.active_tab = Some("src/index.ts".to_string());

    let rows = rows(&state);
    let index = rows.iter().find(|r| r.path == "src/index.ts").unwrap();
    assert!(index.is_selected);
    assert!(index.is_dirty);

    let src = rows.iter().find(|r| r.path == "src").unwrap();
    assert!(src.is_dirty);
    assert!(!src.is_selected);

    let util = rows.iter().find(|r| r.path == "src/util").unwrap();
    assert!(!util.is_dirty);
    let pkg = rows.iter().find(|r| r.path == "package.json").unwrap();
    assert!(!pkg.is_dirty);
}

#[test]
fn affordances_follow_read_only() {
    let mut state = sample_state();
    let rw = rows(&state);
    assert!(rw[0].can_create && rw[0].can_delete);
    assert!(!rw[1].can_create && rw[1].can_delete);
    assert!(create_intent(&state, Some("src"), "new.ts").is_some());
    assert!(delete_intent(&state, &rw[1]).is_some());

    state.read_only = true;
    let ro = rows(&state);
    assert!(ro.iter().all(|r| !r.can_create && !r.can_delete));
    assert_eq!(create_intent(&state, Some("src"), "new.ts"), None);
    assert_eq!(delete_intent(&state, &ro[1]), None);
}

#[test]
fn intents_map_to_actions() {
    let state = sample_state();
    let rows = rows(&state);
    assert_eq!(
        click_intent(&rows[0]),
        Action::ToggleExpanded("src".to_string())
    );
    assert_eq!(
        click_intent(&rows[1]),
        Action::OpenFile("package.json".to_string())
    );
    assert_eq!(
        delete_intent(&state, &rows[0]),
        Some(Action::DeletePath {
            path: "src".to_string(),
            is_directory: true
        })
    );
    assert_eq!(
        create_intent(&state, None, " README.md "),
        Some(Action::CreateFile {
            path: "README.md".to_string(),
            content: String::new()
        })
    );
}

#[test]
fn render_row_marks_directories_and_dirty() {
    let mut state = sample_state();
    state.expanded_paths.insert("src".to_string());
    open_dirty(&mut state, "src/index.ts");
    let rows = rows(&state);
    assert_eq!(render_row(&rows[0]), "▼ src ●");
    assert_eq!(render_row(&rows[1]), "  ▶ util");
    assert_eq!(render_row(&rows[2]), "    index.ts ●");
}

#[test]
fn hit_test_accounts_for_scroll() {
    let mut state = sample_state();
    state.expanded_paths.insert("src".to_string());
    state.expanded_paths.insert("src/util".to_string());

    let mut view = ExplorerView::new();
    view.set_area(Rect::new(0, 2, 20, 2));
    assert_eq!(view.hit_test_row(5, 1), None);
    assert_eq!(view.hit_test_row(5, 2), Some(0));

    view.scroll_by(10, 5);
    assert_eq!(view.scroll_offset(), 3);
    assert_eq!(view.visible_range(5), 3..5);
    assert_eq!(
        view.click(&state, 0, 2),
        Some(Action::OpenFile("src/index.ts".to_string()))
    );

    view.ensure_visible(0);
    assert_eq!(view.scroll_offset(), 0);
    view.ensure_visible(4);
    assert_eq!(view.scroll_offset(), 3);
}

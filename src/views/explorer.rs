//! File tree view (headless rows + hit testing)

use crate::kernel::{Action, SessionState};
use crate::models::file_tree::{is_same_or_descendant, join_path};
use crate::models::{FileTreeNode, NodeKind};

use super::geom::Rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeRow<'a> {
    pub path: &'a str,
    pub name: &'a str,
    pub depth: u16,
    pub kind: NodeKind,
    pub is_expanded: bool,
    /// The row's file is the active tab. Never set on directories.
    pub is_selected: bool,
    /// A file with unsaved edits, or a directory containing one.
    pub is_dirty: bool,
    pub can_create: bool,
    pub can_delete: bool,
}

impl FileTreeRow<'_> {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Visible rows in tree order, descending only into expanded directories.
pub fn rows(state: &SessionState) -> Vec<FileTreeRow<'_>> {
    let modified = state.modified_paths();
    let mut out = Vec::new();
    push_rows(state, &modified, &state.tree, 0, &mut out);
    out
}

fn push_rows<'a>(
    state: &'a SessionState,
    modified: &[&str],
    nodes: &'a [FileTreeNode],
    depth: u16,
    out: &mut Vec<FileTreeRow<'a>>,
) {
    for node in nodes {
        let is_dir = node.is_dir();
        let is_expanded = is_dir && state.is_expanded(&node.path);
        let is_dirty = if is_dir {
            modified
                .iter()
                .any(|p| *p != node.path && is_same_or_descendant(p, &node.path))
        } else {
            modified.contains(&node.path.as_str())
        };

        out.push(FileTreeRow {
            path: &node.path,
            name: &node.name,
            depth,
            kind: node.kind,
            is_expanded,
            is_selected: !is_dir && state.active_tab.as_deref() == Some(node.path.as_str()),
            is_dirty,
            can_create: is_dir && !state.read_only,
            can_delete: !state.read_only,
        });

        if is_expanded {
            push_rows(state, modified, &node.children, depth.saturating_add(1), out);
        }
    }
}

/// Toggle for directories, open for files.
pub fn click_intent(row: &FileTreeRow<'_>) -> Action {
    if row.is_dir() {
        Action::ToggleExpanded(row.path.to_string())
    } else {
        Action::OpenFile(row.path.to_string())
    }
}

/// New empty file `name` inside `dir` (`None` for the root). `None` when read-only.
pub fn create_intent(state: &SessionState, dir: Option<&str>, name: &str) -> Option<Action> {
    if state.read_only {
        return None;
    }
    Some(Action::CreateFile {
        path: join_path(dir.unwrap_or(""), name.trim()),
        content: String::new(),
    })
}

pub fn delete_intent(state: &SessionState, row: &FileTreeRow<'_>) -> Option<Action> {
    if state.read_only {
        return None;
    }
    Some(Action::DeletePath {
        path: row.path.to_string(),
        is_directory: row.is_dir(),
    })
}

/// Plain-text rendering of one row: indent, disclosure marker, name, dirty dot.
pub fn render_row(row: &FileTreeRow<'_>) -> String {
    let indent = "  ".repeat(row.depth as usize);
    let icon = if row.is_dir() {
        if row.is_expanded {
            "▼ "
        } else {
            "▶ "
        }
    } else {
        "  "
    };
    let dirty = if row.is_dirty { " ●" } else { "" };
    format!("{indent}{icon}{}{dirty}", row.name)
}

/// Scroll position and last laid-out area of the tree panel.
#[derive(Debug, Default)]
pub struct ExplorerView {
    area: Option<Rect>,
    scroll_offset: usize,
}

impl ExplorerView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = Some(area);
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area.is_some_and(|a| a.contains(x, y))
    }

    pub fn view_height(&self) -> Option<usize> {
        self.area.map(|a| a.h as usize)
    }

    /// Range of row indices currently on screen.
    pub fn visible_range(&self, total_rows: usize) -> std::ops::Range<usize> {
        let height = self.view_height().unwrap_or(total_rows);
        let start = self.scroll_offset.min(total_rows);
        start..(start + height).min(total_rows)
    }

    pub fn scroll_by(&mut self, delta: isize, total_rows: usize) {
        let max = total_rows.saturating_sub(self.view_height().unwrap_or(0));
        let next = if delta < 0 {
            self.scroll_offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll_offset.saturating_add(delta as usize)
        };
        self.scroll_offset = next.min(max);
    }

    pub fn ensure_visible(&mut self, index: usize) {
        let Some(height) = self.view_height().filter(|h| *h > 0) else {
            return;
        };
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + height {
            self.scroll_offset = index + 1 - height;
        }
    }

    pub fn hit_test_row(&self, x: u16, y: u16) -> Option<usize> {
        let area = self.area?;
        if !area.contains(x, y) {
            return None;
        }
        Some((y - area.y) as usize + self.scroll_offset)
    }

    /// Intent for a click at `(x, y)`, if it lands on a row.
    pub fn click(&self, state: &SessionState, x: u16, y: u16) -> Option<Action> {
        let index = self.hit_test_row(x, y)?;
        rows(state).get(index).map(click_intent)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/explorer.rs"]
mod tests;

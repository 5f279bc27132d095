//! Quick-open palette view model.

use crate::kernel::quick_open;
use crate::kernel::SessionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickOpenItem<'a> {
    pub path: &'a str,
    pub name: &'a str,
    pub is_recent: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickOpenView<'a> {
    pub query: &'a str,
    pub items: Vec<QuickOpenItem<'a>>,
    /// Total matches, which may exceed `items.len()`.
    pub total: usize,
}

impl QuickOpenView<'_> {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// `None` while the palette is hidden. At most `limit` items, scrolled so the
/// selection is included.
pub fn quick_open_view(state: &SessionState, limit: usize) -> Option<QuickOpenView<'_>> {
    if !state.quick_open.visible {
        return None;
    }
    let query = state.quick_open.query.as_str();
    let matches = quick_open::search(&state.tree, &state.recent_paths, query);
    let total = matches.len();
    let selected = state.quick_open.selected.min(total.saturating_sub(1));
    let start = (selected + 1).saturating_sub(limit);

    let items = matches
        .into_iter()
        .enumerate()
        .skip(start)
        .take(limit)
        .map(|(i, m)| QuickOpenItem {
            path: m.path,
            name: m.name,
            is_recent: m.recent_rank.is_some(),
            is_selected: i == selected,
        })
        .collect();

    Some(QuickOpenView {
        query,
        items,
        total,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/views/quick_open.rs"]
mod tests;

//! Tab strip: one slot per open document, laid out by display width and scrolled
//! horizontally so the active tab stays in view.

use crate::kernel::{Action, SessionState};
use crate::models::file_tree::file_name;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PADDING_LEFT: u16 = 1;
const PADDING_RIGHT: u16 = 1;
const DIRTY_WIDTH: u16 = 2;
const CLOSE_BUTTON_WIDTH: u16 = 2;
const DIVIDER_WIDTH: u16 = 1;
pub const MAX_TITLE_WIDTH: u16 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSlot<'a> {
    pub path: &'a str,
    pub title: &'a str,
    /// `title` ellipsized to `MAX_TITLE_WIDTH` cells.
    pub label: String,
    pub is_active: bool,
    pub is_dirty: bool,
    pub is_loading: bool,
    /// Close affordance; absent in read-only sessions.
    pub closable: bool,
}

pub fn tab_slots(state: &SessionState) -> Vec<TabSlot<'_>> {
    state
        .tabs
        .iter()
        .map(|path| TabSlot {
            path,
            title: file_name(path),
            label: ellipsize_title(file_name(path), MAX_TITLE_WIDTH),
            is_active: state.active_tab.as_deref() == Some(path.as_str()),
            is_dirty: state.is_modified(path),
            is_loading: state.document(path).is_some_and(|d| d.is_loading()),
            closable: !state.read_only,
        })
        .collect()
}

/// Horizontal extents of one slot in strip coordinates (before scrolling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabRowSlot {
    pub index: usize,
    pub start: u16,
    pub end: u16,
    /// Clicks in `start..hit_end` activate the tab.
    pub hit_end: u16,
    pub dirty_x: Option<u16>,
    pub title_x: u16,
    pub title_width: u16,
    pub close_start: Option<u16>,
    pub close_end: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabRowLayout {
    pub slots: Vec<TabRowSlot>,
    pub content_width: u16,
}

pub fn compute_tab_row_layout(slots: &[TabSlot<'_>]) -> TabRowLayout {
    let mut x: u16 = 0;
    let mut out = Vec::with_capacity(slots.len());

    for (index, slot) in slots.iter().enumerate() {
        let start = x;
        x = x.saturating_add(PADDING_LEFT);

        let dirty_x = if slot.is_dirty {
            let pos = x;
            x = x.saturating_add(DIRTY_WIDTH);
            Some(pos)
        } else {
            None
        };

        let title_x = x;
        let title_width = UnicodeWidthStr::width(slot.label.as_str()) as u16;
        x = x.saturating_add(title_width).saturating_add(PADDING_RIGHT);

        let hit_end = x;
        let mut close_start = None;
        if slot.closable {
            close_start = Some(x);
            x = x.saturating_add(CLOSE_BUTTON_WIDTH);
        }

        out.push(TabRowSlot {
            index,
            start,
            end: x,
            hit_end,
            dirty_x,
            title_x,
            title_width,
            close_start,
            close_end: x,
        });

        if index + 1 < slots.len() {
            x = x.saturating_add(DIVIDER_WIDTH);
        }
    }

    TabRowLayout {
        slots: out,
        content_width: x,
    }
}

pub fn ellipsize_title(title: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    if max_width == 0 {
        return String::new();
    }

    if UnicodeWidthStr::width(title) <= max_width {
        return title.to_string();
    }

    if max_width == 1 {
        return "…".to_string();
    }

    let keep = truncate_to_width(title, max_width - 1);
    if keep == 0 {
        return "…".to_string();
    }

    let mut out = String::with_capacity(keep + 3);
    out.push_str(&title[..keep]);
    out.push('…');
    out
}

/// Byte length of the longest prefix of `s` no wider than `max_width` cells.
fn truncate_to_width(s: &str, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, ch) in s.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + ch.len_utf8();
    }
    end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabHit {
    Tab(usize),
    Close(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOverflowAction {
    CloseOthers,
    CloseAll,
}

/// Bulk actions are offered only once there is more than one tab.
pub fn overflow_actions(state: &SessionState) -> &'static [TabOverflowAction] {
    if state.tabs.len() > 1 {
        &[TabOverflowAction::CloseOthers, TabOverflowAction::CloseAll]
    } else {
        &[]
    }
}

pub fn overflow_intent(state: &SessionState, action: TabOverflowAction) -> Option<Action> {
    if state.tabs.len() <= 1 {
        return None;
    }
    match action {
        TabOverflowAction::CloseOthers => state
            .active_tab
            .clone()
            .map(Action::CloseOtherTabs),
        TabOverflowAction::CloseAll => Some(Action::CloseAllTabs),
    }
}

pub fn hit_intent(state: &SessionState, hit: TabHit) -> Option<Action> {
    match hit {
        TabHit::Tab(index) => state.tabs.get(index).cloned().map(Action::OpenFile),
        TabHit::Close(index) => state.tabs.get(index).cloned().map(Action::CloseTab),
    }
}

/// Horizontal scroll state of the strip.
#[derive(Debug, Default)]
pub struct TabStripView {
    width: u16,
    scroll_offset: u16,
    last_active: Option<String>,
    layout: TabRowLayout,
}

impl TabStripView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn layout(&self) -> &TabRowLayout {
        &self.layout
    }

    /// Re-lays out the strip for `width` cells. When the active tab changed since the
    /// previous sync, scrolls just enough to bring it fully into view.
    pub fn sync(&mut self, state: &SessionState, width: u16) {
        self.width = width;
        self.layout = compute_tab_row_layout(&tab_slots(state));

        if self.last_active != state.active_tab {
            self.last_active = state.active_tab.clone();
            let active = state
                .active_tab
                .as_deref()
                .and_then(|path| state.tabs.iter().position(|t| t == path));
            if let Some(slot) = active.and_then(|i| self.layout.slots.get(i)) {
                if slot.start < self.scroll_offset {
                    self.scroll_offset = slot.start;
                } else if slot.end > self.scroll_offset.saturating_add(width) {
                    self.scroll_offset = slot.end.saturating_sub(width);
                }
            }
        }

        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll_offset as i32 + delta).max(0) as u16;
        self.scroll_offset = next.min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        self.layout.content_width.saturating_sub(self.width)
    }

    /// `x` is relative to the strip's left edge.
    pub fn hit_test(&self, x: u16) -> Option<TabHit> {
        if x >= self.width {
            return None;
        }
        let x = x.saturating_add(self.scroll_offset);
        let slot = self
            .layout
            .slots
            .iter()
            .find(|s| x >= s.start && x < s.end)?;
        match slot.close_start {
            Some(close) if x >= close && x < slot.close_end => Some(TabHit::Close(slot.index)),
            _ if x < slot.hit_end => Some(TabHit::Tab(slot.index)),
            _ => None,
        }
    }

    pub fn click(&self, state: &SessionState, x: u16) -> Option<Action> {
        hit_intent(state, self.hit_test(x)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/tab_row.rs"]
mod tests;

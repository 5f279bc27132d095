//! View layer
//!
//! Headless view models read from `SessionState` and turn gestures into `Action`s:
//! - explorer: file tree rows
//! - tab_row: tab strip layout and scrolling
//! - quick_open: palette items
//! - editor: text widget binding

pub mod editor;
pub mod explorer;
pub mod geom;
pub mod quick_open;
pub mod tab_row;

pub use editor::EditorSurface;
pub use explorer::{ExplorerView, FileTreeRow};
pub use geom::Rect;
pub use quick_open::{quick_open_view, QuickOpenItem, QuickOpenView};
pub use tab_row::{
    compute_tab_row_layout, ellipsize_title, tab_slots, TabHit, TabOverflowAction, TabRowLayout,
    TabRowSlot, TabSlot, TabStripView,
};

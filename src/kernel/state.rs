use rustc_hash::{FxHashMap, FxHashSet};

use crate::kernel::services::ports::Preferences;
use crate::models::file_tree;
use crate::models::FileTreeNode;

pub const MAX_RECENT_PATHS: usize = 10;

/// The editable representation of one file open in a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    /// Distinguishes a reopened document from the one a late response was meant for.
    pub id: u64,
    pub path: String,
    /// `None` until the first content load completes.
    pub saved_content: Option<String>,
    pub buffer_content: String,
    pub is_dirty: bool,
}

impl OpenDocument {
    pub fn loading(id: u64, path: String) -> Self {
        Self {
            id,
            path,
            saved_content: None,
            buffer_content: String::new(),
            is_dirty: false,
        }
    }

    pub fn loaded(id: u64, path: String, content: String) -> Self {
        Self {
            id,
            path,
            buffer_content: content.clone(),
            saved_content: Some(content),
            is_dirty: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.saved_content.is_none()
    }

    /// Returns `true` if the dirty flag flipped.
    pub fn refresh_dirty(&mut self) -> bool {
        let dirty = match self.saved_content.as_deref() {
            Some(saved) => saved != self.buffer_content,
            None => false,
        };
        let changed = dirty != self.is_dirty;
        self.is_dirty = dirty;
        changed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickOpenState {
    pub visible: bool,
    pub query: String,
    pub selected: usize,
}

impl QuickOpenState {
    pub fn reset(&mut self) {
        self.visible = false;
        self.query.clear();
        self.selected = 0;
    }
}

/// Bookkeeping for requests that are still in flight.
#[derive(Debug, Clone, Default)]
pub struct PendingRequests {
    /// Last generation handed out to any tree or file load.
    pub generation: u64,
    /// Latest tree load issued, if it has not resolved yet.
    pub tree: Option<u64>,
    /// Latest file load issued per path.
    pub files: FxHashMap<String, u64>,
    /// Path -> id of the document whose buffer is being written.
    pub saving: FxHashMap<String, u64>,
    pub queued_saves: FxHashSet<String>,
    pub creating: FxHashSet<String>,
    pub deleting: FxHashSet<String>,
    pub packing: bool,
    pub next_document_id: u64,
}

impl PendingRequests {
    pub fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn next_document_id(&mut self) -> u64 {
        self.next_document_id = self.next_document_id.wrapping_add(1);
        self.next_document_id
    }
}

/// One editor instance's in-memory state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub tree: Vec<FileTreeNode>,
    pub tree_error: Option<String>,
    pub expanded_paths: FxHashSet<String>,
    pub tabs: Vec<String>,
    pub active_tab: Option<String>,
    pub documents: FxHashMap<String, OpenDocument>,
    pub recent_paths: Vec<String>,
    pub preferences: Preferences,
    pub read_only: bool,
    pub quick_open: QuickOpenState,
    pub pending: PendingRequests,
}

impl SessionState {
    pub fn new(preferences: Preferences, read_only: bool) -> Self {
        Self {
            preferences,
            read_only,
            ..Self::default()
        }
    }

    pub fn document(&self, path: &str) -> Option<&OpenDocument> {
        self.documents.get(path)
    }

    pub fn active_document(&self) -> Option<&OpenDocument> {
        self.active_tab
            .as_deref()
            .and_then(|path| self.documents.get(path))
    }

    pub fn is_modified(&self, path: &str) -> bool {
        self.documents.get(path).is_some_and(|d| d.is_dirty)
    }

    /// Paths of every dirty document, in tab order.
    pub fn modified_paths(&self) -> Vec<&str> {
        self.tabs
            .iter()
            .filter(|path| self.is_modified(path))
            .map(String::as_str)
            .collect()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.documents.values().any(|d| d.is_dirty)
    }

    pub fn is_saving(&self) -> bool {
        !self.pending.saving.is_empty()
    }

    pub fn is_saving_path(&self, path: &str) -> bool {
        self.pending.saving.contains_key(path)
    }

    pub fn is_loading_tree(&self) -> bool {
        self.pending.tree.is_some()
    }

    pub fn is_loading_file(&self) -> bool {
        self.documents.values().any(OpenDocument::is_loading)
    }

    pub fn is_packing(&self) -> bool {
        self.pending.packing
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded_paths.contains(path)
    }

    pub fn find_node(&self, path: &str) -> Option<&FileTreeNode> {
        file_tree::find(&self.tree, path)
    }

    pub(crate) fn push_recent(&mut self, path: &str) -> bool {
        if self.recent_paths.first().map(String::as_str) == Some(path) {
            return false;
        }
        self.recent_paths.retain(|p| p != path);
        self.recent_paths.insert(0, path.to_string());
        self.recent_paths.truncate(MAX_RECENT_PATHS);
        true
    }
}

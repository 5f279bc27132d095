//! Data models shared by the kernel and the views.

pub mod file_tree;

pub use file_tree::{FileEntry, FileTreeError, FileTreeNode, NodeKind};

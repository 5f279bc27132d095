//! File tree data model mirrored from the remote store.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    #[serde(alias = "dir", alias = "folder")]
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTreeError {
    ParentNotDirectory,
    NameExists,
    InvalidPath,
}

impl fmt::Display for FileTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTreeError::ParentNotDirectory => write!(f, "parent is not a directory"),
            FileTreeError::NameExists => write!(f, "name already exists in parent"),
            FileTreeError::InvalidPath => write!(f, "invalid path"),
        }
    }
}

impl std::error::Error for FileTreeError {}

/// One entry of the remote tree. `path` is the stable identifier: for a child it is
/// always `parent.path + "/" + name`, for a root-level node it is `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTreeNode {
    pub path: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileTreeNode>,
}

impl FileTreeNode {
    pub fn file(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: file_name(&path).to_string(),
            path,
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    pub fn directory(path: impl Into<String>, children: Vec<FileTreeNode>) -> Self {
        let path = path.into();
        Self {
            name: file_name(&path).to_string(),
            path,
            kind: NodeKind::Directory,
            children,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// A file flattened out of the tree, as consumed by quick-open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry<'a> {
    pub path: &'a str,
    pub name: &'a str,
}

pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}

pub fn parent_path(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => "",
    }
}

pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// `true` when `path` equals `ancestor` or lives below it.
pub fn is_same_or_descendant(path: &str, ancestor: &str) -> bool {
    path == ancestor
        || (path.len() > ancestor.len()
            && path.starts_with(ancestor)
            && path.as_bytes()[ancestor.len()] == b'/')
}

/// Strictly-proper ancestors of `path`, outermost first.
pub fn ancestors(path: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for (idx, ch) in path.char_indices() {
        if ch == '/' {
            out.push(&path[..idx]);
        }
    }
    out
}

pub fn find<'a>(nodes: &'a [FileTreeNode], path: &str) -> Option<&'a FileTreeNode> {
    for node in nodes {
        if node.path == path {
            return Some(node);
        }
        if node.is_dir() && is_same_or_descendant(path, &node.path) {
            return find(&node.children, path);
        }
    }
    None
}

pub fn contains(nodes: &[FileTreeNode], path: &str) -> bool {
    find(nodes, path).is_some()
}

/// Insert `node` below its parent directory, creating missing ancestor directories.
/// Existing children keep their order; the new node is appended.
pub fn insert(nodes: &mut Vec<FileTreeNode>, node: FileTreeNode) -> Result<(), FileTreeError> {
    if node.path.is_empty() || node.name.is_empty() {
        return Err(FileTreeError::InvalidPath);
    }

    let parent = parent_path(&node.path).to_string();
    let siblings = ensure_dir(nodes, &parent)?;
    if siblings.iter().any(|n| n.name == node.name) {
        return Err(FileTreeError::NameExists);
    }
    siblings.push(node);
    Ok(())
}

fn ensure_dir<'a>(
    nodes: &'a mut Vec<FileTreeNode>,
    dir: &str,
) -> Result<&'a mut Vec<FileTreeNode>, FileTreeError> {
    if dir.is_empty() {
        return Ok(nodes);
    }

    let mut current = nodes;
    let mut prefix = String::new();
    for segment in dir.split('/') {
        if segment.is_empty() {
            return Err(FileTreeError::InvalidPath);
        }
        prefix = join_path(&prefix, segment);

        let idx = match current.iter().position(|n| n.name == segment) {
            Some(idx) => idx,
            None => {
                current.push(FileTreeNode::directory(prefix.clone(), Vec::new()));
                current.len() - 1
            }
        };
        let entry = &mut current[idx];
        if !entry.is_dir() {
            return Err(FileTreeError::ParentNotDirectory);
        }
        current = &mut entry.children;
    }
    Ok(current)
}

/// Remove the node at `path` (with its subtree). Returns the removed node.
pub fn remove(nodes: &mut Vec<FileTreeNode>, path: &str) -> Option<FileTreeNode> {
    if let Some(idx) = nodes.iter().position(|n| n.path == path) {
        return Some(nodes.remove(idx));
    }
    nodes
        .iter_mut()
        .filter(|n| n.is_dir() && is_same_or_descendant(path, &n.path))
        .find_map(|n| remove(&mut n.children, path))
}

/// Depth-first list of every file in the tree, directories excluded.
pub fn flatten_files(nodes: &[FileTreeNode]) -> Vec<FileEntry<'_>> {
    let mut out = Vec::new();
    collect_files(nodes, &mut out);
    out
}

fn collect_files<'a>(nodes: &'a [FileTreeNode], out: &mut Vec<FileEntry<'a>>) {
    for node in nodes {
        match node.kind {
            NodeKind::File => out.push(FileEntry {
                path: &node.path,
                name: &node.name,
            }),
            NodeKind::Directory => collect_files(&node.children, out),
        }
    }
}

/// Paths of every directory, parents before children.
pub fn flatten_dirs(nodes: &[FileTreeNode]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut stack: Vec<&FileTreeNode> = nodes.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.is_dir() {
            out.push(node.path.as_str());
            stack.extend(node.children.iter().rev());
        }
    }
    out
}

pub fn count_nodes(nodes: &[FileTreeNode]) -> usize {
    nodes.iter().map(|n| 1 + count_nodes(&n.children)).sum()
}

#[cfg(test)]
#[path = "../../tests/unit/models/file_tree.rs"]
mod tests;

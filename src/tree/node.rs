//! Tree node types produced by the walker

use std::path::PathBuf;

use serde::Serialize;

/// Kind of filesystem entry a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Folder,
}

/// One entry below the scan root.
///
/// For folders `size` is the total of every file in the full subtree, even
/// when the depth limit left `children` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub name: String,
    /// Resolved path with symlinks followed.
    pub path: PathBuf,
    pub relative_path: PathBuf,
    pub size: u64,
    pub size_formatted: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Children of a folder; always empty for files.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

/// A scanned folder: the ordered top-level entries plus the root header data.
///
/// The root itself is not a node; renderers print it as a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderTree {
    /// Root path as the caller supplied it.
    pub root: PathBuf,
    pub total_size: u64,
    pub total_size_formatted: String,
    pub entries: Vec<Node>,
}

impl FolderTree {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Base name of the root, used for page titles and generated file names.
    pub fn root_name(&self) -> String {
        self.root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.root.to_string_lossy().to_string())
    }
}

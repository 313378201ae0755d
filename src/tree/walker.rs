//! TreeWalker - builds the depth-limited folder tree in memory

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::ScanError;

use super::config::WalkerConfig;
use super::node::{FolderTree, Node, NodeKind};
use super::utils::{format_size, relative_to, should_ignore_path, subtree_size};

/// One directory whose listing is still being consumed.
struct Frame {
    entries: std::vec::IntoIter<(OsString, PathBuf)>,
    depth: usize,
    built: Vec<Node>,
    /// The folder these children belong to; `None` for the scan root.
    folder: Option<Node>,
}

impl Frame {
    fn new(entries: Vec<(OsString, PathBuf)>, depth: usize, folder: Option<Node>) -> Self {
        Self {
            entries: entries.into_iter(),
            depth,
            built: Vec::new(),
            folder,
        }
    }
}

/// Tree walker that builds the full tree in memory.
///
/// The shape of the tree is cut off at `max_depth`, but every folder's size
/// comes from a separate unbounded walk of its subtree, so truncation hides
/// structure and never size.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Check the root, build its tree and compute the total size.
    pub fn scan(&self, root: &Path) -> Result<FolderTree, ScanError> {
        let entries = self.build(root)?;
        let total_size = self.subtree_size(root);

        Ok(FolderTree {
            root: root.to_path_buf(),
            total_size,
            total_size_formatted: format_size(total_size),
            entries,
        })
    }

    /// Build the ordered list of top-level nodes under `root`.
    ///
    /// Fails only when the root itself is missing, unreadable or not a
    /// directory. Anything that goes wrong further down is skipped.
    pub fn build(&self, root: &Path) -> Result<Vec<Node>, ScanError> {
        check_root(root)?;

        if self.config.max_depth == 0 {
            return Ok(Vec::new());
        }

        let base = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let mut stack = vec![Frame::new(self.list_dir(root), 0, None)];

        // Explicit stack instead of recursion so deep trees cannot overflow.
        while let Some(frame) = stack.last_mut() {
            let depth = frame.depth;

            match frame.entries.next() {
                Some((name, path)) => {
                    let Some(node) = self.make_node(&name, &path, &base) else {
                        continue;
                    };

                    if node.is_folder() && depth + 1 < self.config.max_depth {
                        let listing = self.list_dir(&node.path);
                        stack.push(Frame::new(listing, depth + 1, Some(node)));
                    } else {
                        frame.built.push(node);
                    }
                }
                None => {
                    let Some(done) = stack.pop() else { break };
                    let Some(mut folder) = done.folder else {
                        return Ok(done.built);
                    };
                    folder.children = Some(done.built);
                    if let Some(parent) = stack.last_mut() {
                        parent.built.push(folder);
                    }
                }
            }
        }

        Ok(Vec::new())
    }

    /// Total size of `path` with this walker's ignore patterns applied.
    pub fn subtree_size(&self, path: &Path) -> u64 {
        subtree_size(path, &self.config.ignore_patterns)
    }

    /// Immediate children of `path`, sorted by name.
    fn list_dir(&self, path: &Path) -> Vec<(OsString, PathBuf)> {
        let entries = match fs::read_dir(path) {
            Ok(e) => e,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "cannot list directory");
                return Vec::new();
            }
        };

        let mut entries: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(e) => Some((e.file_name(), e.path())),
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|(_, entry_path)| {
                !should_ignore_path(entry_path, &self.config.ignore_patterns)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Resolve one listed entry into a node, or `None` if it has to be skipped.
    fn make_node(&self, name: &OsString, path: &Path, base: &Path) -> Option<Node> {
        trace!(path = %path.display(), "visiting");

        let real = match fs::canonicalize(path) {
            Ok(p) => p,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "cannot resolve entry, skipping");
                return None;
            }
        };
        let meta = match fs::metadata(&real) {
            Ok(m) => m,
            Err(err) => {
                debug!(path = %real.display(), error = %err, "cannot stat entry, skipping");
                return None;
            }
        };

        let (kind, size, children) = if meta.is_dir() {
            (NodeKind::Folder, self.subtree_size(&real), Some(Vec::new()))
        } else {
            (NodeKind::File, meta.len(), None)
        };

        Some(Node {
            kind,
            name: name.to_string_lossy().to_string(),
            relative_path: relative_to(&real, base),
            path: real,
            size,
            size_formatted: format_size(size),
            children,
        })
    }
}

/// Verify the scan root exists, is readable and is a directory, in that order.
fn check_root(root: &Path) -> Result<(), ScanError> {
    let path = root.to_path_buf();

    let meta = match fs::metadata(root) {
        Ok(m) => m,
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            return Err(ScanError::PermissionDenied { path });
        }
        Err(_) => return Err(ScanError::NotFound { path }),
    };

    let probe = if meta.is_dir() {
        fs::read_dir(root).map(drop)
    } else {
        fs::File::open(root).map(drop)
    };
    if let Err(err) = probe {
        if err.kind() == io::ErrorKind::PermissionDenied {
            return Err(ScanError::PermissionDenied { path });
        }
    }

    if !meta.is_dir() {
        return Err(ScanError::NotADirectory { path });
    }

    Ok(())
}

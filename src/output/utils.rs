//! Shared utility functions for output formatting

use std::collections::HashMap;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::tree::Node;

pub const FOLDER_ICON: &str = "📁";
pub const FILE_ICON: &str = "📄";

/// Icon shown before a node's name.
pub fn icon(node: &Node) -> &'static str {
    if node.is_folder() { FOLDER_ICON } else { FILE_ICON }
}

/// Branch drawn before a nested entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Calculate the prefix for the children of an entry.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Deterministic element id for a path: `item-` plus its SHA-256 in hex.
pub fn path_id(path: &Path) -> String {
    let digest = Sha256::digest(path.to_string_lossy().as_bytes());
    format!("item-{:x}", digest)
}

/// Hands out element ids, suffixing repeats so every id in a page is unique.
///
/// Two nodes share a path when a symlink resolves to an entry shown
/// elsewhere in the tree.
#[derive(Debug, Default)]
pub struct IdAllocator {
    seen: HashMap<String, usize>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id_for(&mut self, path: &Path) -> String {
        let base = path_id(path);
        let count = self.seen.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{}-{}", base, count)
        }
    }
}

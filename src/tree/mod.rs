//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory one level at a time down to the
//! configured depth and sorts siblings by name. Sizes are computed by a
//! separate unbounded walk (`subtree_size`), so a folder cut off by the
//! depth limit still reports the full size of everything beneath it.

mod config;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_MAX_DEPTH, WalkerConfig};
pub use node::{FolderTree, Node, NodeKind};
pub use utils::{format_size, format_size_signed, glob_match, relative_to, subtree_size};
pub use walker::TreeWalker;

//! Foldyy - folder trees annotated with file and folder sizes

pub mod error;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::ScanError;
pub use output::{HtmlFormatter, OutputConfig, TextFormatter, print_json, to_json};
pub use tree::{
    FolderTree, Node, NodeKind, TreeWalker, WalkerConfig, format_size, format_size_signed,
    subtree_size,
};

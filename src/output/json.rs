//! JSON output formatting

use std::io;

use crate::tree::FolderTree;

/// Serialize the tree as pretty-printed JSON.
pub fn to_json(tree: &FolderTree) -> io::Result<String> {
    serde_json::to_string_pretty(tree).map_err(io::Error::other)
}

/// Print the tree as pretty-printed JSON to stdout.
pub fn print_json(tree: &FolderTree) -> io::Result<()> {
    let json = to_json(tree)?;
    println!("{}", json);
    Ok(())
}

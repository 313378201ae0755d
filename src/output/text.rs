//! Text formatter for the box-drawing tree listing
//!
//! This module provides `TextFormatter` which formats a `FolderTree` into a
//! plain string or prints it to stdout with colors.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::tree::{FolderTree, Node};

use super::config::OutputConfig;
use super::utils::{FOLDER_ICON, connector, continuation_prefix, icon};

/// Formatter for the indented text tree.
pub struct TextFormatter {
    config: OutputConfig,
}

impl TextFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree as plain text, lines joined by `\n` without a
    /// trailing newline.
    pub fn format(&self, tree: &FolderTree) -> String {
        let mut out = NoColor::new(Vec::new());
        self.write_tree(tree, &mut out)
            .expect("writing to a Vec cannot fail");
        let mut text = String::from_utf8_lossy(&out.into_inner()).into_owned();
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }

    /// Print the tree to stdout, colored when enabled.
    pub fn print(&self, tree: &FolderTree) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_tree(tree, &mut stdout)?;
        stdout.flush()
    }

    /// Write the header and the tree lines; every line ends with `\n`.
    pub fn write_tree<W: WriteColor>(&self, tree: &FolderTree, out: &mut W) -> io::Result<()> {
        write!(out, "{} ", FOLDER_ICON)?;
        out.set_color(&folder_spec())?;
        write!(out, "{}", tree.root.display())?;
        out.reset()?;
        writeln!(out)?;

        if self.config.show_sizes {
            writeln!(out, "Total Size: {}", tree.total_size_formatted)?;
        }
        writeln!(out)?;

        if tree.is_empty() {
            writeln!(out, "(empty folder)")?;
            return Ok(());
        }

        self.write_nodes(&tree.entries, out, "", 0)
    }

    fn write_nodes<W: WriteColor>(
        &self,
        nodes: &[Node],
        out: &mut W,
        prefix: &str,
        level: usize,
    ) -> io::Result<()> {
        for (i, node) in nodes.iter().enumerate() {
            let is_last = i == nodes.len() - 1;

            // Top-level entries sit flush left
            if level > 0 {
                write!(out, "{}{}", prefix, connector(is_last))?;
            }
            write!(out, "{} ", icon(node))?;

            if node.is_folder() {
                out.set_color(&folder_spec())?;
            }
            write!(out, "{}", node.name)?;
            out.reset()?;

            if self.config.show_sizes {
                out.set_color(ColorSpec::new().set_dimmed(true))?;
                write!(out, " ({})", node.size_formatted)?;
                out.reset()?;
            }
            writeln!(out)?;

            if node.has_children() {
                let child_prefix = continuation_prefix(prefix, is_last);
                self.write_nodes(node.children(), out, &child_prefix, level + 1)?;
            }
        }
        Ok(())
    }
}

fn folder_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Blue)).set_bold(true);
    spec
}

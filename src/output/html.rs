//! HTML output formatting
//!
//! `HtmlFormatter` renders a `FolderTree` as a standalone page with inline
//! styles and script. Folders start collapsed; each toggle addresses its
//! children container by an id derived from the folder's path.

use crate::tree::{FolderTree, Node};

use super::config::OutputConfig;
use super::utils::{FOLDER_ICON, IdAllocator, escape_html, icon};

const STYLES: &str = include_str!("assets/tree.css");
const SCRIPT: &str = include_str!("assets/tree.js");

/// Formatter producing a self-contained HTML document.
pub struct HtmlFormatter {
    config: OutputConfig,
}

impl HtmlFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the complete document.
    pub fn format(&self, tree: &FolderTree) -> String {
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!(
            "<title>Folder Tree - {}</title>\n",
            escape_html(&tree.root_name())
        ));
        html.push_str("<style>\n");
        html.push_str(STYLES);
        html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

        self.push_header(&mut html, tree);

        html.push_str("<div class=\"main\">\n");
        if tree.is_empty() {
            html.push_str("<div class=\"empty-folder\"><p>This folder is empty.</p></div>\n");
        } else {
            html.push_str("<div class=\"tree\">\n");
            let mut ids = IdAllocator::new();
            self.push_nodes(&mut html, &tree.entries, 0, &mut ids);
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n</div>\n");

        html.push_str("<script>\n");
        html.push_str(SCRIPT);
        html.push_str("</script>\n</body>\n</html>\n");
        html
    }

    fn push_header(&self, html: &mut String, tree: &FolderTree) {
        html.push_str("<div class=\"header\">\n");
        html.push_str(&format!(
            "<h1>{} {}</h1>\n",
            FOLDER_ICON,
            escape_html(&tree.root.to_string_lossy())
        ));
        html.push_str("<div class=\"header-info\">\n");
        if self.config.show_sizes {
            html.push_str(&format!(
                "<span class=\"total-size\">Total Size: <strong>{}</strong></span>\n",
                escape_html(&tree.total_size_formatted)
            ));
        }
        html.push_str("<div class=\"tree-controls\">\n");
        html.push_str(
            "<button type=\"button\" class=\"tree-control-btn\" id=\"expand-all-btn\">Expand All</button>\n",
        );
        html.push_str(
            "<button type=\"button\" class=\"tree-control-btn\" id=\"collapse-all-btn\">Collapse All</button>\n",
        );
        html.push_str("</div>\n</div>\n</div>\n");
    }

    fn push_nodes(&self, html: &mut String, nodes: &[Node], level: usize, ids: &mut IdAllocator) {
        let indent = "  ".repeat(level * 2);

        for node in nodes {
            let kind = if node.is_folder() { "folder" } else { "file" };
            html.push_str(&format!(
                "{}<div class=\"tree-item {}\" data-level=\"{}\" data-path=\"{}\">\n",
                indent,
                kind,
                level,
                escape_html(&node.path.to_string_lossy())
            ));
            html.push_str(&format!("{}  <div class=\"tree-item-content\">", indent));

            if self.config.show_sizes {
                html.push_str(&format!(
                    "<span class=\"tree-size\">{}</span>",
                    escape_html(&node.size_formatted)
                ));
            }

            let children_id = node.has_children().then(|| ids.id_for(&node.path));
            match &children_id {
                Some(id) => html.push_str(&format!(
                    "<button type=\"button\" class=\"tree-toggle\" aria-label=\"Toggle folder\" \
                     aria-expanded=\"false\" data-target=\"{}\"><span class=\"toggle-icon\">▶</span></button>",
                    id
                )),
                None => html.push_str("<span class=\"tree-toggle-placeholder\"></span>"),
            }

            html.push_str(&format!(
                "<span class=\"tree-icon\">{}</span><span class=\"tree-name\">{}</span></div>\n",
                icon(node),
                escape_html(&node.name)
            ));

            if let Some(id) = children_id {
                html.push_str(&format!(
                    "{}  <div class=\"tree-children\" id=\"{}\" style=\"display: none;\">\n",
                    indent, id
                ));
                self.push_nodes(html, node.children(), level + 1, ids);
                html.push_str(&format!("{}  </div>\n", indent));
            }

            html.push_str(&format!("{}</div>\n", indent));
        }
    }
}

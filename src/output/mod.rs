//! Tree formatting and display
//!
//! This module provides formatters for outputting a scanned folder:
//! - Text output with box-drawing connectors (plain or colored)
//! - Standalone HTML with collapsible folders
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared helpers (icons, prefixes, HTML escaping, element ids)
//! - `text` - Text tree formatter
//! - `html` - HTML document formatter
//! - `json` - JSON output

mod config;
mod html;
mod json;
mod text;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use html::HtmlFormatter;
pub use json::{print_json, to_json};
pub use text::TextFormatter;

pub use utils::{escape_html, path_id};

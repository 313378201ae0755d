//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Colorize terminal output; only the text formatter's `print` uses it.
    pub use_color: bool,
    /// Show per-entry sizes and the total size line.
    pub show_sizes: bool,
}

impl OutputConfig {
    /// Plain output with sizes, the same as `Default` minus color.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            ..Default::default()
        }
    }

    pub fn with_sizes(mut self, show_sizes: bool) -> Self {
        self.show_sizes = show_sizes;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_sizes: true,
        }
    }
}

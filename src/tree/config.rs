//! Configuration types for tree walkers

/// Default number of directory levels shown below the scan root.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Number of levels listed below the root. 0 lists nothing; sizes are
    /// always computed over the full subtree regardless.
    pub max_depth: usize,
    /// Glob patterns matched against entry names. Matching entries are left
    /// out of the tree and out of every size sum.
    pub ignore_patterns: Vec<String>,
}

impl WalkerConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore_patterns: Vec::new(),
        }
    }
}

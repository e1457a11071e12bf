//! Evaluation limits.

/// Default limit on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Settings applied while building an expression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest parenthesis nesting a node may be built at. The root is
    /// level 0 and each group interior adds one level; operator chains such
    /// as `1+1+1` stay on the level of their enclosing group.
    pub max_depth: usize,
}

impl EvalConfig {
    /// Same as [`EvalConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

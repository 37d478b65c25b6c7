//! Configuration for the matching engine.
//!
//! Two knobs are exposed:
//! - traversal: how the augmentation pass walks the layered graph. Both
//!   formulations visit neighbors in insertion order and stop at the first
//!   augmenting path, so they return identical matchings.
//! - edges: whether a repeated `(u, v)` insertion is stored again or ignored.
//!
//! Quick examples
//!
//! ```
//! use hkm_matching::{Config, EdgePolicy, Traversal};
//!
//! let cfg = Config::builder()
//!     .recursive()
//!     .dedupe_edges()
//!     .build();
//! assert_eq!(cfg.traversal, Traversal::Recursive);
//! assert_eq!(cfg.edges, EdgePolicy::Dedupe);
//! ```

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Depth-first formulation used during augmentation.
    pub traversal: Traversal,
    /// Handling of repeated edges on insertion.
    pub edges: EdgePolicy,
}

impl Config {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(traversal: Traversal, edges: EdgePolicy) -> Self {
        Self { traversal, edges }
    }

    /// Start from the default configuration and adjust fluently.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Depth-first formulation for the augmentation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Explicit stack. Safe for arbitrarily deep layerings.
    #[default]
    Iterative,
    /// Native recursion; depth is bounded by the number of BFS layers.
    Recursive,
}

/// What to do when the same edge is inserted twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Append every insertion, duplicates included.
    #[default]
    KeepDuplicates,
    /// Ignore an insertion whose endpoint is already in the adjacency list.
    Dedupe,
}

/// Fluent builder for [`Config`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ConfigBuilder {
    /// Configuration under construction.
    config: Config,
}

impl ConfigBuilder {
    /// Use the given traversal.
    #[must_use]
    pub const fn traversal(mut self, traversal: Traversal) -> Self {
        self.config.traversal = traversal;
        self
    }

    /// Use the explicit-stack traversal.
    #[must_use]
    pub const fn iterative(self) -> Self {
        self.traversal(Traversal::Iterative)
    }

    /// Use the recursive traversal.
    #[must_use]
    pub const fn recursive(self) -> Self {
        self.traversal(Traversal::Recursive)
    }

    /// Use the given edge policy.
    #[must_use]
    pub const fn edges(mut self, edges: EdgePolicy) -> Self {
        self.config.edges = edges;
        self
    }

    /// Ignore repeated edges.
    #[must_use]
    pub const fn dedupe_edges(self) -> Self {
        self.edges(EdgePolicy::Dedupe)
    }

    /// Keep repeated edges.
    #[must_use]
    pub const fn keep_duplicates(self) -> Self {
        self.edges(EdgePolicy::KeepDuplicates)
    }

    /// Finish building.
    #[must_use]
    pub const fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.traversal, Traversal::Iterative);
        assert_eq!(cfg.edges, EdgePolicy::KeepDuplicates);
    }

    #[test]
    fn test_builder_last_call_wins() {
        let cfg = Config::builder().recursive().iterative().build();
        assert_eq!(cfg, Config::new(Traversal::Iterative, EdgePolicy::KeepDuplicates));
    }
}

//! The Hopcroft–Karp matching engine.

use contracts::*;
use tracing::{debug, info, trace};

use crate::config::{Config, Traversal};
use crate::error::MatchingError;
use crate::graph::Adjacency;
use crate::layers::Layering;
use crate::matching::Matching;
use crate::search::{augment_iterative, augment_recursive};
use crate::vertex::{LeftVertex, MAX_VERTICES, RightVertex};

/// Counters from the most recent [`MatchingEngine::compute_maximum_matching`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Phases that found at least one augmenting path.
    pub phases: usize,
    /// Augmenting paths flipped during the call.
    pub augmentations: usize,
    /// Matching size when the call returned.
    pub size: usize,
}

/// Owns a bipartite graph and the maximum matching computed over it.
///
/// Build with [`MatchingEngine::new`], insert edges with
/// [`MatchingEngine::add_edge`], then call
/// [`MatchingEngine::compute_maximum_matching`]. Edges may still be added
/// afterwards; the next computation extends the existing matching.
///
/// ```
/// use hkm_matching::MatchingEngine;
///
/// let mut engine = MatchingEngine::new(2, 2);
/// engine.add_edge(1, 1).unwrap();
/// engine.add_edge(1, 2).unwrap();
/// engine.add_edge(2, 1).unwrap();
///
/// assert_eq!(engine.compute_maximum_matching(), 2);
/// assert_eq!(engine.matched_pairs().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct MatchingEngine {
    left_count: usize,
    right_count: usize,
    adjacency: Adjacency,
    matching: Matching,
    layering: Layering,
    config: Config,
    last_run: RunStats,
}

impl MatchingEngine {
    /// Creates an engine with the default [`Config`].
    #[must_use]
    pub fn new(left_count: usize, right_count: usize) -> Self {
        Self::with_config(left_count, right_count, Config::default())
    }

    /// Creates an engine with every vertex unmatched.
    ///
    /// # Panics
    ///
    /// Panics if either count exceeds [`MAX_VERTICES`], the largest id a
    /// vertex can carry.
    #[must_use]
    pub fn with_config(left_count: usize, right_count: usize, config: Config) -> Self {
        assert!(
            left_count <= MAX_VERTICES && right_count <= MAX_VERTICES,
            "vertex counts {left_count}x{right_count} exceed {MAX_VERTICES}"
        );
        Self {
            left_count,
            right_count,
            adjacency: Adjacency::new(left_count),
            matching: Matching::new(left_count, right_count),
            layering: Layering::new(left_count),
            config,
            last_run: RunStats::default(),
        }
    }

    /// Adds an edge from left vertex `left` to right vertex `right` (both 1-based).
    ///
    /// # Errors
    ///
    /// Returns [`MatchingError::InvalidEdge`] if either endpoint is out of
    /// range. The engine is unchanged in that case.
    pub fn add_edge(&mut self, left: usize, right: usize) -> Result<(), MatchingError> {
        let (Some(u), Some(v)) = (
            LeftVertex::checked(left, self.left_count),
            RightVertex::checked(right, self.right_count),
        ) else {
            return Err(MatchingError::invalid_edge(
                left,
                right,
                self.left_count,
                self.right_count,
            ));
        };

        if !self.adjacency.insert(u, v, self.config.edges) {
            trace!("Ignoring duplicate edge ({}, {})", u, v);
        }
        Ok(())
    }

    /// Adds every edge, collecting the rejected ones instead of stopping.
    pub fn add_edges<I>(&mut self, edges: I) -> Vec<MatchingError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        edges
            .into_iter()
            .filter_map(|(u, v)| self.add_edge(u, v).err())
            .collect()
    }

    /// Grows the matching until no augmenting path remains and returns its size.
    ///
    /// Each phase layers the graph breadth-first from the free left vertices,
    /// then augments along vertex-disjoint shortest paths. Calling this again
    /// without new edges changes nothing and returns the same size.
    #[debug_ensures(self.matching.is_consistent())]
    #[debug_ensures(ret == self.matching.len())]
    pub fn compute_maximum_matching(&mut self) -> usize {
        let mut stats = RunStats::default();
        let mut stack = Vec::new();

        while self.layering.build(&self.adjacency, &self.matching) {
            trace!(
                "Phase {} shortest augmenting path crosses {:?} left vertices",
                stats.phases + 1,
                self.layering.free_distance()
            );
            let roots: Vec<LeftVertex> = self.matching.free_left().collect();
            let mut augmented = 0;

            for root in roots {
                if !self.matching.is_left_free(root) {
                    continue;
                }
                let found = match self.config.traversal {
                    Traversal::Iterative => augment_iterative(
                        root,
                        &self.adjacency,
                        &mut self.layering,
                        &mut self.matching,
                        &mut stack,
                    ),
                    Traversal::Recursive => augment_recursive(
                        root,
                        &self.adjacency,
                        &mut self.layering,
                        &mut self.matching,
                    ),
                };
                if found {
                    augmented += 1;
                }
            }

            stats.phases += 1;
            stats.augmentations += augmented;
            debug!(
                "Phase {} augmented {} paths, matching size {}",
                stats.phases,
                augmented,
                self.matching.len()
            );

            // A successful layering always leaves at least one path to flip.
            debug_assert!(augmented > 0, "layering found a path the search could not");
            if augmented == 0 {
                break;
            }
        }

        stats.size = self.matching.len();
        info!(
            "Maximum matching of size {} after {} phases",
            stats.size, stats.phases
        );
        self.last_run = stats;
        stats.size
    }

    /// Matched pairs in increasing left id order.
    #[must_use]
    pub fn matched_pairs(&self) -> Vec<(LeftVertex, RightVertex)> {
        self.matching.pairs()
    }

    /// The current matching.
    #[must_use]
    pub const fn matching(&self) -> &Matching {
        &self.matching
    }

    /// Right partner of left vertex `left` (1-based), if matched.
    #[must_use]
    pub fn partner_of_left(&self, left: usize) -> Option<RightVertex> {
        LeftVertex::checked(left, self.left_count).and_then(|u| self.matching.partner_of_left(u))
    }

    /// Left partner of right vertex `right` (1-based), if matched.
    #[must_use]
    pub fn partner_of_right(&self, right: usize) -> Option<LeftVertex> {
        RightVertex::checked(right, self.right_count)
            .and_then(|v| self.matching.partner_of_right(v))
    }

    /// Neighbors of left vertex `left` (1-based) in insertion order.
    #[must_use]
    pub fn neighbors(&self, left: usize) -> &[RightVertex] {
        LeftVertex::checked(left, self.left_count)
            .map(|u| self.adjacency.neighbors(u))
            .unwrap_or_default()
    }

    /// Returns true if every vertex on the smaller side is matched.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.matching.len() == self.left_count.min(self.right_count)
    }

    /// Counters from the last computation.
    #[must_use]
    pub const fn last_run(&self) -> RunStats {
        self.last_run
    }

    /// Number of left vertices.
    #[must_use]
    pub const fn left_count(&self) -> usize {
        self.left_count
    }

    /// Number of right vertices.
    #[must_use]
    pub const fn right_count(&self) -> usize {
        self.right_count
    }

    /// Stored edges, duplicates included.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    /// Configuration the engine was built with.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }
}

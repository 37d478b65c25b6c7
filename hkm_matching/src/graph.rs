//! Left-to-right adjacency lists.

use std::collections::HashSet;

use contracts::*;

use crate::config::EdgePolicy;
use crate::vertex::{LeftVertex, RightVertex};

/// Directed adjacency from each left vertex to the right vertices it reaches.
///
/// Neighbors keep insertion order; that order decides which of several maximum
/// matchings the search settles on.
#[derive(Clone, Debug, Default)]
pub(crate) struct Adjacency {
    /// Neighbor list per left slot.
    lists: Vec<Vec<RightVertex>>,
    /// Total stored edges, duplicates included.
    edge_count: usize,
    /// Edges inserted under [`EdgePolicy::Dedupe`].
    seen: HashSet<(LeftVertex, RightVertex)>,
}

impl Adjacency {
    /// Creates empty lists for `left_count` vertices.
    pub(crate) fn new(left_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); left_count],
            edge_count: 0,
            seen: HashSet::new(),
        }
    }

    /// Appends `right` to the list of `left`. Returns false if the policy dropped it.
    ///
    /// Repeat detection is a set lookup, so deduplicating stays linear in the
    /// number of edges however they are spread over left vertices.
    #[debug_requires(left.index() < self.lists.len())]
    pub(crate) fn insert(
        &mut self,
        left: LeftVertex,
        right: RightVertex,
        policy: EdgePolicy,
    ) -> bool {
        if policy == EdgePolicy::Dedupe && !self.seen.insert((left, right)) {
            return false;
        }
        self.lists[left.index()].push(right);
        self.edge_count += 1;
        true
    }

    /// Neighbors of `left` in insertion order.
    pub(crate) fn neighbors(&self, left: LeftVertex) -> &[RightVertex] {
        self.lists
            .get(left.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of stored edges.
    pub(crate) const fn edge_count(&self) -> usize {
        self.edge_count
    }
}

//! Breadth-first layering of the alternating graph.
//!
//! Free left vertices form layer 0. A matched left vertex `w` sits one layer
//! below `u` when `u` has an edge to `w`'s partner. Free right vertices are
//! collapsed into a single terminal layer, `free_distance`; it is finite after
//! [`Layering::build`] exactly when some augmenting path exists.

use std::collections::VecDeque;

use tracing::trace;

use crate::graph::Adjacency;
use crate::matching::Matching;
use crate::vertex::{LeftVertex, RightVertex};

/// Per-phase distance labels.
#[derive(Clone, Debug)]
pub(crate) struct Layering {
    /// Layer of each left slot, or `unreachable`.
    distance: Vec<usize>,
    /// Layer at which a free right vertex was first reached.
    free_distance: usize,
    /// Larger than any real layer: the deepest layer is at most the left count.
    unreachable: usize,
    /// BFS work queue, kept to reuse its allocation between phases.
    queue: VecDeque<LeftVertex>,
}

impl Layering {
    pub(crate) fn new(left_count: usize) -> Self {
        let unreachable = left_count + 2;
        Self {
            distance: vec![unreachable; left_count],
            free_distance: unreachable,
            unreachable,
            queue: VecDeque::with_capacity(left_count),
        }
    }

    /// Recomputes every label from the current matching.
    ///
    /// Returns true if a free right vertex is reachable along alternating paths.
    pub(crate) fn build(&mut self, adjacency: &Adjacency, matching: &Matching) -> bool {
        self.queue.clear();
        for (slot, dist) in self.distance.iter_mut().enumerate() {
            let u = LeftVertex::from_index(slot);
            if matching.is_left_free(u) {
                *dist = 0;
                self.queue.push_back(u);
            } else {
                *dist = self.unreachable;
            }
        }
        self.free_distance = self.unreachable;

        while let Some(u) = self.queue.pop_front() {
            let du = self.distance[u.index()];
            // Nothing past the first free right layer can lie on a shortest path.
            if du >= self.free_distance {
                continue;
            }
            for &v in adjacency.neighbors(u) {
                match matching.partner_of_right(v) {
                    Some(w) if self.distance[w.index()] == self.unreachable => {
                        self.distance[w.index()] = du + 1;
                        self.queue.push_back(w);
                    }
                    None if self.free_distance == self.unreachable => {
                        self.free_distance = du + 1;
                    }
                    _ => {}
                }
            }
        }

        trace!("Layering done, free right layer at {:?}", self.free_distance());
        self.free_distance != self.unreachable
    }

    /// Layer of the vertex reached by crossing to `right`: its partner, or the
    /// free layer if `right` is unmatched.
    fn distance_through(&self, right: RightVertex, matching: &Matching) -> usize {
        matching
            .partner_of_right(right)
            .map_or(self.free_distance, |w| self.distance[w.index()])
    }

    /// Returns true if the edge `left -> right` descends exactly one layer.
    pub(crate) fn is_next_layer(
        &self,
        left: LeftVertex,
        right: RightVertex,
        matching: &Matching,
    ) -> bool {
        let du = self.distance[left.index()];
        du != self.unreachable && self.distance_through(right, matching) == du + 1
    }

    /// Removes `left` from the layering for the rest of the phase.
    pub(crate) fn kill(&mut self, left: LeftVertex) {
        self.distance[left.index()] = self.unreachable;
    }

    #[cfg(test)]
    pub(crate) fn distance(&self, left: LeftVertex) -> Option<usize> {
        let d = self.distance[left.index()];
        (d != self.unreachable).then_some(d)
    }

    pub(crate) fn free_distance(&self) -> Option<usize> {
        (self.free_distance != self.unreachable).then_some(self.free_distance)
    }
}

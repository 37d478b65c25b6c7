//! Pairing state shared by the layering and augmentation passes.

use contracts::*;
use itertools::Itertools;
use std::fmt;

use crate::vertex::{LeftVertex, RightVertex};

/// A set of vertex-disjoint left/right pairs.
///
/// Both directions are stored so that either side can be resolved in O(1).
/// `partner_of_left(u) == Some(v)` holds exactly when `partner_of_right(v) == Some(u)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matching {
    /// Left slot to matched right vertex.
    pair_left: Vec<Option<RightVertex>>,
    /// Right slot to matched left vertex.
    pair_right: Vec<Option<LeftVertex>>,
    /// Number of matched pairs.
    size: usize,
}

impl Matching {
    /// Checks that both directions describe the same set of pairs.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let forward = self
            .pair_left
            .iter()
            .enumerate()
            .filter_map(|(slot, partner)| partner.map(|v| (LeftVertex::from_index(slot), v)))
            .all(|(u, v)| self.partner_of_right(v) == Some(u));

        let backward = self
            .pair_right
            .iter()
            .enumerate()
            .filter_map(|(slot, partner)| partner.map(|u| (u, RightVertex::from_index(slot))))
            .all(|(u, v)| self.partner_of_left(u) == Some(v));

        let counted = self.pair_left.iter().flatten().count();
        forward && backward && counted == self.size
    }

    /// Creates an empty matching over the given vertex counts.
    #[debug_ensures(ret.is_consistent())]
    #[debug_ensures(ret.is_empty())]
    pub(crate) fn new(left_count: usize, right_count: usize) -> Self {
        Self {
            pair_left: vec![None; left_count],
            pair_right: vec![None; right_count],
            size: 0,
        }
    }

    /// Pairs `left` with `right`.
    ///
    /// Any previous partner of either endpoint becomes free. Only the touched
    /// slots are checked here; the full scan runs once per computation.
    #[debug_requires(left.index() < self.pair_left.len())]
    #[debug_requires(right.index() < self.pair_right.len())]
    #[debug_ensures(self.partner_of_left(left) == Some(right))]
    #[debug_ensures(self.partner_of_right(right) == Some(left))]
    pub(crate) fn assign(&mut self, left: LeftVertex, right: RightVertex) {
        if let Some(old_right) = self.pair_left[left.index()].take() {
            self.pair_right[old_right.index()] = None;
            self.size -= 1;
        }
        if let Some(old_left) = self.pair_right[right.index()].take() {
            self.pair_left[old_left.index()] = None;
            self.size -= 1;
        }
        self.pair_left[left.index()] = Some(right);
        self.pair_right[right.index()] = Some(left);
        self.size += 1;
    }

    /// Frees `left` and its partner, if any. Returns the former partner.
    #[cfg(test)]
    #[debug_ensures(self.is_consistent())]
    #[debug_ensures(self.is_left_free(left))]
    pub(crate) fn unassign(&mut self, left: LeftVertex) -> Option<RightVertex> {
        let right = self
            .pair_left
            .get_mut(left.index())
            .and_then(Option::take);
        if let Some(old_right) = right {
            self.pair_right[old_right.index()] = None;
            self.size -= 1;
        }
        right
    }

    /// Right vertex currently matched with `left`.
    #[must_use]
    pub fn partner_of_left(&self, left: LeftVertex) -> Option<RightVertex> {
        self.pair_left.get(left.index()).copied().flatten()
    }

    /// Left vertex currently matched with `right`.
    #[must_use]
    pub fn partner_of_right(&self, right: RightVertex) -> Option<LeftVertex> {
        self.pair_right.get(right.index()).copied().flatten()
    }

    /// Returns true if `left` has no partner.
    #[must_use]
    pub fn is_left_free(&self, left: LeftVertex) -> bool {
        self.partner_of_left(left).is_none()
    }

    /// Unmatched left vertices in increasing id order.
    pub fn free_left(&self) -> impl Iterator<Item = LeftVertex> + '_ {
        self.pair_left
            .iter()
            .enumerate()
            .filter(|(_, partner)| partner.is_none())
            .map(|(slot, _)| LeftVertex::from_index(slot))
    }

    /// Matched pairs in increasing left id order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(LeftVertex, RightVertex)> {
        self.pair_left
            .iter()
            .enumerate()
            .filter_map(|(slot, partner)| partner.map(|v| (LeftVertex::from_index(slot), v)))
            .collect()
    }

    /// Number of matched pairs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns true if nothing is matched.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of left vertices covered by this matching's tables.
    #[must_use]
    pub fn left_count(&self) -> usize {
        self.pair_left.len()
    }

    /// Number of right vertices covered by this matching's tables.
    #[must_use]
    pub fn right_count(&self) -> usize {
        self.pair_right.len()
    }
}

impl fmt::Display for Matching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .pairs()
            .into_iter()
            .map(|(u, v)| format!("{u}-{v}"))
            .join(", ");
        write!(f, "{{{body}}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(id: usize) -> LeftVertex {
        LeftVertex::checked(id, 10).unwrap()
    }

    fn r(id: usize) -> RightVertex {
        RightVertex::checked(id, 10).unwrap()
    }

    #[test]
    fn test_matching_consistency() {
        let mut matching = Matching::new(10, 10);
        matching.assign(l(1), r(3));

        assert_eq!(matching.len(), 1);
        assert_eq!(matching.partner_of_left(l(1)), Some(r(3)));
        assert_eq!(matching.partner_of_right(r(3)), Some(l(1)));
        assert!(matching.is_consistent());
    }

    #[test]
    fn test_reassign_frees_old_partners() {
        let mut matching = Matching::new(10, 10);
        matching.assign(l(1), r(1));
        matching.assign(l(2), r(2));

        // Steal r2 for l1: r1 and l2 become free.
        matching.assign(l(1), r(2));

        assert_eq!(matching.len(), 1);
        assert_eq!(matching.partner_of_right(r(1)), None);
        assert!(matching.is_left_free(l(2)));
        assert_eq!(matching.pairs(), vec![(l(1), r(2))]);
    }

    #[test]
    fn test_unassign() {
        let mut matching = Matching::new(10, 10);
        matching.assign(l(4), r(7));

        assert_eq!(matching.unassign(l(4)), Some(r(7)));
        assert_eq!(matching.unassign(l(4)), None);
        assert!(matching.is_empty());
    }

    #[test]
    fn test_pairs_sorted_by_left() {
        let mut matching = Matching::new(10, 10);
        matching.assign(l(5), r(1));
        matching.assign(l(2), r(9));
        matching.assign(l(8), r(4));

        let lefts: Vec<usize> = matching.pairs().iter().map(|(u, _)| u.get()).collect();
        assert_eq!(lefts, vec![2, 5, 8]);
        assert_eq!(matching.to_string(), "{L2-R9, L5-R1, L8-R4}");
    }

    #[test]
    fn test_free_left() {
        let mut matching = Matching::new(3, 3);
        matching.assign(LeftVertex::from_index(1), RightVertex::from_index(0));

        let free: Vec<usize> = matching.free_left().map(LeftVertex::get).collect();
        assert_eq!(free, vec![1, 3]);
    }
}

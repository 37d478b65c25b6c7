//! Maximum bipartite matching with the Hopcroft–Karp algorithm.
//!
//! The crate centres on [`MatchingEngine`], which owns a left-to-right
//! adjacency structure and the pairing state built over it. Each phase of the
//! computation layers the graph breadth-first from the unmatched left vertices,
//! then flips a maximal set of vertex-disjoint shortest augmenting paths found
//! depth-first. The number of phases is O(sqrt(V)), for O(E·sqrt(V)) overall.
//!
//! Vertex ids are 1-based on both sides; see [`LeftVertex`] and [`RightVertex`].

mod config;
mod engine;
mod error;
mod graph;
mod layers;
mod matching;
mod search;
mod vertex;

pub use crate::config::{Config, ConfigBuilder, EdgePolicy, Traversal};
pub use crate::engine::{MatchingEngine, RunStats};
pub use crate::error::MatchingError;
pub use crate::matching::Matching;
pub use crate::vertex::{LeftVertex, MAX_VERTICES, RightVertex};

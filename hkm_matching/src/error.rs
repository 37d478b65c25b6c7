//! Error types for engine operations.
//!
//! Only edge insertion can fail. The matching computation itself is total over
//! any engine built with [`crate::MatchingEngine::new`].

use thiserror::Error;

/// Errors reported by [`crate::MatchingEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchingError {
    /// An edge endpoint lies outside the declared vertex ranges.
    ///
    /// The engine is left untouched and stays usable.
    #[error(
        "Invalid edge ({left}, {right}): expected left in 1..={left_count} and right in 1..={right_count}"
    )]
    InvalidEdge {
        /// Raw left endpoint as supplied.
        left: usize,
        /// Raw right endpoint as supplied.
        right: usize,
        /// Number of left vertices in the engine.
        left_count: usize,
        /// Number of right vertices in the engine.
        right_count: usize,
    },
}

impl MatchingError {
    /// Create an invalid edge error.
    #[must_use]
    pub const fn invalid_edge(
        left: usize,
        right: usize,
        left_count: usize,
        right_count: usize,
    ) -> Self {
        Self::InvalidEdge {
            left,
            right,
            left_count,
            right_count,
        }
    }
}

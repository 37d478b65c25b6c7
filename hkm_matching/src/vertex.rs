//! Typed vertex identifiers for the two sides of a bipartite graph.
//!
//! Ids are 1-based as seen by callers. Internally every per-vertex table is
//! indexed 0-based through [`LeftVertex::index`] / [`RightVertex::index`], so
//! no slot is reserved for an "unmatched" sentinel; absence is `Option::None`.

use serde::Serialize;
use std::fmt;

/// Largest vertex count per side; ids must fit the `u32` they are stored in.
pub const MAX_VERTICES: usize = u32::MAX as usize;

macro_rules! vertex_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name {
            /// The underlying 1-based id, never 0.
            inner: u32,
        }

        impl $name {
            /// Validates a raw 1-based id against the number of vertices on this side.
            ///
            /// Returns `None` for 0 and for anything above `count`.
            #[must_use]
            pub fn checked(id: usize, count: usize) -> Option<Self> {
                if id == 0 || id > count {
                    return None;
                }
                u32::try_from(id).ok().map(|inner| Self { inner })
            }

            /// Builds an id from a 0-based table slot.
            ///
            /// Slots come from tables sized by a count already bounded by
            /// [`MAX_VERTICES`], so the id always fits.
            #[inline]
            pub(crate) fn from_index(slot: usize) -> Self {
                debug_assert!(slot < MAX_VERTICES, "slot {slot} has no vertex id");
                Self {
                    inner: u32::try_from(slot + 1).unwrap_or(u32::MAX),
                }
            }

            /// Returns the 1-based id.
            #[must_use]
            pub const fn get(self) -> usize {
                self.inner as usize
            }

            /// Returns the 0-based slot used for table access.
            #[must_use]
            pub const fn index(self) -> usize {
                self.inner as usize - 1
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.inner)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(id: $name) -> Self {
                id.get()
            }
        }
    };
}

vertex_id!(
    /// A vertex on the left side, id in `1..=left_count`.
    LeftVertex,
    "L"
);

vertex_id!(
    /// A vertex on the right side, id in `1..=right_count`.
    RightVertex,
    "R"
);

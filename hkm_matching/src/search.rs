//! Depth-first augmentation over a built [`Layering`].
//!
//! Only edges that descend exactly one layer are followed, so every path found
//! in a phase is a shortest augmenting path. A vertex whose neighbors are all
//! exhausted is killed for the rest of the phase.

use tracing::trace;

use crate::graph::Adjacency;
use crate::layers::Layering;
use crate::matching::Matching;
use crate::vertex::LeftVertex;

/// Searches from `root` recursively and flips the first augmenting path found.
pub(super) fn augment_recursive(
    root: LeftVertex,
    adjacency: &Adjacency,
    layering: &mut Layering,
    matching: &mut Matching,
) -> bool {
    for &v in adjacency.neighbors(root) {
        if !layering.is_next_layer(root, v, matching) {
            continue;
        }
        let reached_free = match matching.partner_of_right(v) {
            None => true,
            Some(w) => augment_recursive(w, adjacency, layering, matching),
        };
        if reached_free {
            matching.assign(root, v);
            return true;
        }
    }
    layering.kill(root);
    false
}

/// A left vertex on the current path and the neighbor slot it is trying.
#[derive(Clone, Copy, Debug)]
pub(super) struct Frame {
    /// Left vertex of this step.
    vertex: LeftVertex,
    /// Index into the vertex's neighbor list.
    cursor: usize,
}

/// Same search as [`augment_recursive`] driven by an explicit stack.
///
/// `stack` is scratch space; it is cleared on entry.
pub(super) fn augment_iterative(
    root: LeftVertex,
    adjacency: &Adjacency,
    layering: &mut Layering,
    matching: &mut Matching,
    stack: &mut Vec<Frame>,
) -> bool {
    stack.clear();
    stack.push(Frame {
        vertex: root,
        cursor: 0,
    });

    while let Some(&Frame { vertex: u, cursor }) = stack.last() {
        let neighbors = adjacency.neighbors(u);
        let next = neighbors[cursor..]
            .iter()
            .position(|&v| layering.is_next_layer(u, v, matching))
            .map(|offset| cursor + offset);

        let Some(slot) = next else {
            layering.kill(u);
            stack.pop();
            if let Some(parent) = stack.last_mut() {
                parent.cursor += 1;
            }
            continue;
        };

        if let Some(top) = stack.last_mut() {
            top.cursor = slot;
        }

        match matching.partner_of_right(neighbors[slot]) {
            Some(w) => stack.push(Frame {
                vertex: w,
                cursor: 0,
            }),
            None => {
                trace!("Augmenting path of {} left vertices from {}", stack.len(), root);
                // Flip from the free end back to the root.
                for frame in stack.iter().rev() {
                    let v = adjacency.neighbors(frame.vertex)[frame.cursor];
                    matching.assign(frame.vertex, v);
                }
                return true;
            }
        }
    }
    false
}

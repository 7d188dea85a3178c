//! Graph reduction: peel ears off the boundary+diagonal graph.
//!
//! Topological, not geometric: an ear is any node currently touched by
//! exactly two segments. No angle or convexity test is involved; correctness
//! relies on connection and pruning having fully subdivided the interior.

use std::collections::VecDeque;

use crate::geom::{Line, Node};

use super::error::PolygonError;
use super::triangle::Triangle;

/// Indices of the segments touching `node`; stops once a third is found.
fn touching(segments: &[Line], node: Node) -> Vec<usize> {
    let mut out = Vec::with_capacity(3);
    for (i, seg) in segments.iter().enumerate() {
        if seg.has_endpoint(node) {
            out.push(i);
            if out.len() > 2 {
                break;
            }
        }
    }
    out
}

/// Reduce `nodes` with `diagonals ∪ edges` to a triangle list.
///
/// Errors
/// - `NotTriangulable` once every remaining node has been tried without
///   finding an ear (the working state can no longer change).
/// - `DegenerateEar` if an ear's two segments share both endpoints.
pub(super) fn reduce_to_triangles(
    nodes: &[Node],
    diagonals: &[Line],
    edges: &[Line],
) -> Result<Vec<Triangle>, PolygonError> {
    let mut work: VecDeque<Node> = nodes.iter().copied().collect();
    let mut segments: Vec<Line> = diagonals.iter().chain(edges).copied().collect();
    let mut triangles = Vec::with_capacity(nodes.len().saturating_sub(2));
    let mut misses = 0usize;

    while work.len() >= 3 {
        let node = work[0];
        let hits = touching(&segments, node);
        if hits.len() != 2 {
            work.rotate_left(1);
            misses += 1;
            if misses >= work.len() {
                return Err(PolygonError::NotTriangulable {
                    remaining: work.len(),
                    triangles: triangles.len(),
                });
            }
            continue;
        }
        misses = 0;
        work.pop_front();
        // hits are ascending: remove the later index first.
        let second = segments.remove(hits[1]);
        let first = segments.remove(hits[0]);
        let (a, b) = match (first.other_end(node), second.other_end(node)) {
            (Some(a), Some(b)) if a != b => (a, b),
            _ => return Err(PolygonError::DegenerateEar { node }),
        };
        triangles.push(Triangle::new(a, node, b));
    }
    Ok(triangles)
}

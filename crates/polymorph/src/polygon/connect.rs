//! Boundary edges and randomized diagonal connection.

use rand::Rng;

use crate::geom::{lines_crossing, Line, Node, Tolerances};

/// One edge per consecutive node pair, including last → first.
pub(super) fn boundary_edges(nodes: &[Node]) -> Vec<Line> {
    (0..nodes.len())
        .map(|i| Line::new(nodes[i], nodes[(i + 1) % nodes.len()]))
        .collect()
}

/// Connect every node to as many others as possible without crossings.
///
/// Each node is an anchor once; its partners are drawn uniformly without
/// replacement from `rng`, so the accepted set (and thus the final mesh)
/// varies with the random stream. A candidate is accepted iff it is new,
/// crosses no edge or accepted diagonal, and passes through no third node.
/// Accepted candidates are visible to later checks immediately.
///
/// The result still contains diagonals through exterior space around concave
/// notches; see `winding::prune_exterior`.
pub(super) fn connect_nodes<R: Rng + ?Sized>(
    nodes: &[Node],
    edges: &[Line],
    rng: &mut R,
    tol: &Tolerances,
) -> Vec<Line> {
    let mut diagonals: Vec<Line> = Vec::new();
    for &anchor in nodes {
        let mut pool: Vec<Node> = nodes.to_vec();
        while !pool.is_empty() {
            let other = pool.swap_remove(rng.gen_range(0..pool.len()));
            if other == anchor {
                continue;
            }
            let candidate = Line::new(anchor, other);
            if edges.contains(&candidate) || diagonals.contains(&candidate) {
                continue;
            }
            let crosses = edges
                .iter()
                .chain(diagonals.iter())
                .any(|seg| lines_crossing(&candidate, seg, tol));
            if crosses || passes_through_node(&candidate, nodes, tol) {
                continue;
            }
            diagonals.push(candidate);
        }
    }
    diagonals
}

/// A segment through a third node overlaps the boundary collinearly.
fn passes_through_node(candidate: &Line, nodes: &[Node], tol: &Tolerances) -> bool {
    nodes
        .iter()
        .any(|&n| !candidate.has_endpoint(n) && candidate.contains_point(n, false, tol))
}

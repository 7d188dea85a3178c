//! Winding-number test and exterior-diagonal pruning.

use crate::geom::{angle_at, direction, Line, Node, Tolerances};

#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Signed angle (degrees, rounded to 2 decimals) swept by the boundary around `p`.
///
/// ±360 for interior points, 0 for exterior ones. Boundary nodes coinciding
/// with `p` contribute nothing, so a point on the boundary lands in between.
pub fn winding_number(boundary: &[Node], p: Node, tol: &Tolerances) -> f64 {
    let mut total = 0.0;
    for (i, &a) in boundary.iter().enumerate() {
        let c = boundary[(i + 1) % boundary.len()];
        let angle = angle_at(a, p, c, tol);
        if direction(a, p, c) > 0.0 {
            total -= angle;
        } else {
            total += angle;
        }
    }
    round2(total)
}

/// Interior iff the boundary winds (at least) one full turn around `p`.
pub fn is_interior(boundary: &[Node], p: Node, tol: &Tolerances) -> bool {
    round2((winding_number(boundary, p, tol) / 360.0).abs()) >= 1.0
}

/// Keep only diagonals whose midpoint is interior.
///
/// Connection only rules out crossings; around a concave notch a diagonal can
/// avoid every segment and still run through exterior space.
pub(super) fn prune_exterior(
    boundary: &[Node],
    mut diagonals: Vec<Line>,
    tol: &Tolerances,
) -> Vec<Line> {
    diagonals.retain(|d| is_interior(boundary, d.midpoint(), tol));
    diagonals
}

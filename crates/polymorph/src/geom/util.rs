use nalgebra::Vector2;

use super::cfg::Tolerances;
use super::types::{Line, LineEquation, Node};

/// Cross product of `(a - vertex)` and `(c - vertex)`.
///
/// Positive when `c - vertex` lies counterclockwise of `a - vertex` (y axis
/// up; clockwise on screen, where y points down). Zero when collinear.
#[inline]
pub fn direction(a: Node, vertex: Node, c: Node) -> f64 {
    let v1: Vector2<f64> = a.to_vec2() - vertex.to_vec2();
    let v2: Vector2<f64> = c.to_vec2() - vertex.to_vec2();
    v1.perp(&v2)
}

/// Unsigned angle `a–vertex–c` in degrees, via the law of cosines.
///
/// Returns 0 when `vertex` coincides with `a` or `c` (within `tol.coincident`).
pub fn angle_at(a: Node, vertex: Node, c: Node, tol: &Tolerances) -> f64 {
    let side_a = a.distance(&vertex);
    let side_b = vertex.distance(&c);
    if side_a < tol.coincident || side_b < tol.coincident {
        return 0.0;
    }
    let side_c = a.distance(&c);
    let cos = (side_a * side_a + side_b * side_b - side_c * side_c) / (2.0 * side_a * side_b);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Intersection point of the infinite lines carrying `l1` and `l2`.
///
/// Cases:
/// - vertical/vertical: none unless both share `x`, then the collinear rule;
/// - vertical/sloped: the sloped line evaluated at the vertical's `x`;
/// - parallel sloped: none unless collinear, then the collinear rule;
/// - otherwise the unique intersection (parametric form).
///
/// Collinear rule: a point exists only if each segment's midpoint lies within
/// the other segment; it is the midpoint of the two midpoints.
///
/// Operands are put in canonical order first so the result does not depend on
/// argument order.
pub fn crosspoint(l1: &Line, l2: &Line, tol: &Tolerances) -> Option<Node> {
    let (l1, l2) = if l1.canonical_cmp(l2).is_le() {
        (l1, l2)
    } else {
        (l2, l1)
    };
    match (l1.equation(), l2.equation()) {
        (LineEquation::Vertical { x: x1 }, LineEquation::Vertical { x: x2 }) => {
            if x1 == x2 {
                collinear_crosspoint(l1, l2, tol)
            } else {
                None
            }
        }
        (LineEquation::Vertical { x }, LineEquation::Sloped { .. }) => Some(l2.point_at_x(x)),
        (LineEquation::Sloped { .. }, LineEquation::Vertical { x }) => Some(l1.point_at_x(x)),
        (LineEquation::Sloped { .. }, LineEquation::Sloped { .. }) => {
            let d1 = l1.direction();
            let d2 = l2.direction();
            let w = l2.p1().to_vec2() - l1.p1().to_vec2();
            let det = d1.perp(&d2);
            if det.abs() <= tol.parallel * l1.length() * l2.length() {
                // Parallel: collinear iff l2 starts on l1's line.
                if d1.perp(&w).abs() / l1.length() < tol.on_line {
                    collinear_crosspoint(l1, l2, tol)
                } else {
                    None
                }
            } else {
                let t = w.perp(&d2) / det;
                Some(Node::from(l1.p1().to_vec2() + d1 * t))
            }
        }
    }
}

fn collinear_crosspoint(l1: &Line, l2: &Line, tol: &Tolerances) -> Option<Node> {
    let m1 = l1.midpoint();
    let m2 = l2.midpoint();
    if l2.contains_point(m1, false, tol) && l1.contains_point(m2, false, tol) {
        Some(Line::new(m1, m2).midpoint())
    } else {
        None
    }
}

/// True iff the segments cross away from their endpoints.
///
/// Touching at a shared vertex is not a crossing.
pub fn lines_crossing(l1: &Line, l2: &Line, tol: &Tolerances) -> bool {
    match crosspoint(l1, l2, tol) {
        Some(p) => l1.contains_point(p, false, tol) && l2.contains_point(p, false, tol),
        None => false,
    }
}

/// Shoelace area of a closed boundary (absolute value).
pub fn boundary_area(nodes: &[Node]) -> f64 {
    if nodes.len() < 3 {
        return 0.0;
    }
    let twice: f64 = (0..nodes.len())
        .map(|i| {
            let p = nodes[i].to_vec2();
            let q = nodes[(i + 1) % nodes.len()].to_vec2();
            p.perp(&q)
        })
        .sum();
    twice.abs() / 2.0
}

//! Basic 2D value types: points and segments.
//!
//! - `Node`: a clicked point, compared by exact coordinates.
//! - `LineEquation`: slope/intercept form, with verticals as their own variant.
//! - `Line`: an undirected segment between two nodes with derived equation and length.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::cfg::Tolerances;

/// Map `-0.0` onto `0.0` so equal coordinates share one bit pattern.
#[inline]
fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

#[inline]
fn within(v: f64, a: f64, b: f64) -> bool {
    v >= a.min(b) && v <= a.max(b)
}

/// A point in the plane.
///
/// Invariants:
/// - Equality and hashing are exact on `(x, y)`; no tolerance.
/// - Coordinates are expected to be finite (`Polygon::add_node` rejects NaN/∞).
#[derive(Clone, Copy, Debug, Default)]
pub struct Node {
    pub x: f64,
    pub y: f64,
}

impl Node {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn pos(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn distance(&self, other: &Node) -> f64 {
        (self.to_vec2() - other.to_vec2()).norm()
    }

    /// Total order key consistent with `Eq`. Not a numeric order.
    #[inline]
    pub(crate) fn key(&self) -> (u64, u64) {
        (canonical_bits(self.x), canonical_bits(self.y))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<Vector2<f64>> for Node {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Node {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Line through two points as `y = a x + b`, or `x = const` when vertical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineEquation {
    Vertical { x: f64 },
    Sloped { a: f64, b: f64 },
}

impl LineEquation {
    pub fn through(p1: Node, p2: Node) -> Self {
        if p1.x == p2.x {
            LineEquation::Vertical { x: p1.x }
        } else {
            let a = (p1.y - p2.y) / (p1.x - p2.x);
            LineEquation::Sloped { a, b: p1.y - a * p1.x }
        }
    }

    /// `None` for vertical lines.
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        match *self {
            LineEquation::Vertical { .. } => None,
            LineEquation::Sloped { a, .. } => Some(a),
        }
    }

    /// `None` for vertical lines (there is no finite intercept to read).
    #[inline]
    pub fn intercept(&self) -> Option<f64> {
        match *self {
            LineEquation::Vertical { .. } => None,
            LineEquation::Sloped { b, .. } => Some(b),
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, LineEquation::Vertical { .. })
    }
}

/// Undirected segment between two nodes.
///
/// Invariants:
/// - `equation` and `length` are derived from the endpoints at construction.
/// - Equality ignores direction: `Line(a, b) == Line(b, a)`.
/// - Identical endpoints give a zero-length segment; callers must not rely on
///   its predicates.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    p1: Node,
    p2: Node,
    equation: LineEquation,
    length: f64,
}

impl Line {
    pub fn new(p1: Node, p2: Node) -> Self {
        Self {
            p1,
            p2,
            equation: LineEquation::through(p1, p2),
            length: p1.distance(&p2),
        }
    }

    #[inline]
    pub fn p1(&self) -> Node {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Node {
        self.p2
    }

    #[inline]
    pub fn nodes(&self) -> [Node; 2] {
        [self.p1, self.p2]
    }

    #[inline]
    pub fn equation(&self) -> LineEquation {
        self.equation
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn midpoint(&self) -> Node {
        Node::new((self.p1.x + self.p2.x) / 2.0, (self.p1.y + self.p2.y) / 2.0)
    }

    /// Direction vector `p2 - p1`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.p2.to_vec2() - self.p1.to_vec2()
    }

    #[inline]
    pub fn has_endpoint(&self, n: Node) -> bool {
        self.p1 == n || self.p2 == n
    }

    /// The endpoint opposite `n`, if `n` is an endpoint.
    pub fn other_end(&self, n: Node) -> Option<Node> {
        if self.p1 == n {
            Some(self.p2)
        } else if self.p2 == n {
            Some(self.p1)
        } else {
            None
        }
    }

    /// Distance from `p` to the nearer endpoint.
    #[inline]
    pub fn distance_from_endpoint(&self, p: Node) -> f64 {
        p.distance(&self.p1).min(p.distance(&self.p2))
    }

    /// Point on this segment's line at abscissa `x`. Only meaningful for sloped lines.
    #[inline]
    pub(crate) fn point_at_x(&self, x: f64) -> Node {
        let t = (x - self.p1.x) / (self.p2.x - self.p1.x);
        Node::new(x, self.p1.y + t * (self.p2.y - self.p1.y))
    }

    /// Membership test.
    ///
    /// - Vertical: same `x`, `y` within the endpoint range.
    /// - Sloped: distance to the line below `tol.on_line`, and the coordinate
    ///   along the dominant axis within the endpoint range. The distance is
    ///   perpendicular, not the residual `|a x + b - y|`, which grows with slope.
    /// - With `include_endpoints == false`, points within `tol.endpoint` of
    ///   either endpoint are rejected, so segments meeting at a shared vertex
    ///   do not count as crossing.
    pub fn contains_point(&self, p: Node, include_endpoints: bool, tol: &Tolerances) -> bool {
        let on_segment = match self.equation {
            LineEquation::Vertical { x } => p.x == x && within(p.y, self.p1.y, self.p2.y),
            LineEquation::Sloped { .. } => {
                let d = self.direction();
                let offset = d.perp(&(p.to_vec2() - self.p1.to_vec2())).abs() / self.length;
                offset < tol.on_line
                    && if d.x.abs() >= d.y.abs() {
                        within(p.x, self.p1.x, self.p2.x)
                    } else {
                        within(p.y, self.p1.y, self.p2.y)
                    }
            }
        };
        on_segment && (include_endpoints || self.distance_from_endpoint(p) >= tol.endpoint)
    }

    /// Endpoints in a canonical order; used for hashing and for operand ordering.
    #[inline]
    pub(crate) fn key(&self) -> ((u64, u64), (u64, u64)) {
        let (a, b) = (self.p1.key(), self.p2.key());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    #[inline]
    pub(crate) fn canonical_cmp(&self, other: &Line) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        (self.p1 == other.p1 && self.p2 == other.p2) || (self.p1 == other.p2 && self.p2 == other.p1)
    }
}

impl Eq for Line {}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

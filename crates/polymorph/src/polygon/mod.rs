//! Polygon closing: boundary → diagonals → pruning → triangles.
//!
//! Purpose
//! - Collect clicked nodes while open, then close the boundary into a triangle
//!   mesh usable for point-in-polygon tests and rendering.
//!
//! Phases (in order, all inside `close*`)
//! 1. `connect::boundary_edges`: one edge per consecutive pair.
//! 2. `connect::connect_nodes`: randomized, crossing-safe diagonals.
//! 3. `winding::prune_exterior`: drop diagonals whose midpoint is outside.
//! 4. `reduce::reduce_to_triangles`: peel degree-2 nodes into triangles.
//!
//! Closing is transactional: on error nothing is committed and the polygon
//! stays open.
//!
//! Code cross-refs: `geom::{Node, Line, Tolerances}`, `geom::rand::ReplayToken`

mod connect;
mod error;
mod reduce;
mod triangle;
mod winding;

pub use error::PolygonError;
pub use triangle::Triangle;
pub use winding::{is_interior, winding_number};

use rand::Rng;

use crate::geom::rand::ReplayToken;
use crate::geom::{boundary_area, Line, Node, Tolerances};

/// A user-drawn polygon and, once closed, its triangulation.
///
/// Invariants:
/// - `nodes` are unique, in insertion order.
/// - `edges.len() == nodes.len()` once closed; all derived lists are empty while open.
/// - `closed` is one-way.
#[derive(Clone, Debug, Default)]
pub struct Polygon {
    nodes: Vec<Node>,
    edges: Vec<Line>,
    diagonals: Vec<Line>,
    triangles: Vec<Triangle>,
    closed: bool,
    tol: Tolerances,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerances(tol: Tolerances) -> Self {
        Self {
            tol,
            ..Self::default()
        }
    }

    /// Open polygon from a boundary; duplicates are skipped like in `add_node`.
    pub fn from_nodes<I>(nodes: I) -> Result<Self, PolygonError>
    where
        I: IntoIterator<Item = Node>,
    {
        let mut p = Self::new();
        for n in nodes {
            p.add_node(n.x, n.y)?;
        }
        Ok(p)
    }

    /// Append a boundary node. Returns `Ok(false)` if an equal node is already present.
    pub fn add_node(&mut self, x: f64, y: f64) -> Result<bool, PolygonError> {
        if self.closed {
            return Err(PolygonError::AlreadyClosed);
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(PolygonError::NonFiniteCoordinate { x, y });
        }
        let node = Node::new(x, y);
        if self.nodes.contains(&node) {
            return Ok(false);
        }
        self.nodes.push(node);
        Ok(true)
    }

    /// Pop the most recently added node (undo).
    pub fn remove_last_node(&mut self) -> Result<Option<Node>, PolygonError> {
        if self.closed {
            return Err(PolygonError::AlreadyClosed);
        }
        Ok(self.nodes.pop())
    }

    /// Close using the thread-local RNG.
    pub fn close(&mut self) -> Result<(), PolygonError> {
        self.close_with_rng(&mut rand::thread_rng())
    }

    /// Close with a reproducible random stream.
    pub fn close_replay(&mut self, tok: ReplayToken) -> Result<(), PolygonError> {
        self.close_with_rng(&mut tok.to_std_rng())
    }

    /// Run all closing phases with an injected random source.
    pub fn close_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), PolygonError> {
        if self.closed {
            return Err(PolygonError::AlreadyClosed);
        }
        if self.nodes.len() < 3 {
            return Err(PolygonError::TooFewNodes {
                count: self.nodes.len(),
            });
        }
        let edges = connect::boundary_edges(&self.nodes);
        let candidates = connect::connect_nodes(&self.nodes, &edges, rng, &self.tol);
        let accepted = candidates.len();
        let diagonals = winding::prune_exterior(&self.nodes, candidates, &self.tol);
        tracing::debug!(
            nodes = self.nodes.len(),
            accepted,
            pruned = accepted - diagonals.len(),
            "diagonals"
        );
        let triangles = reduce::reduce_to_triangles(&self.nodes, &diagonals, &edges)?;
        tracing::debug!(triangles = triangles.len(), "closed");

        self.edges = edges;
        self.diagonals = diagonals;
        self.triangles = triangles;
        self.closed = true;
        Ok(())
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    #[inline]
    pub fn diagonals(&self) -> &[Line] {
        &self.diagonals
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn tolerances(&self) -> &Tolerances {
        &self.tol
    }

    /// True iff some triangle contains the point. Always false while open.
    pub fn is_inside(&self, x: f64, y: f64) -> bool {
        self.select_triangle(x, y).is_some()
    }

    /// First triangle containing the point.
    pub fn select_triangle(&self, x: f64, y: f64) -> Option<&Triangle> {
        let p = Node::new(x, y);
        self.triangles.iter().find(|t| t.contains(p))
    }

    /// Sum of triangle areas (0 while open).
    pub fn area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Shoelace area of the boundary; available in either state.
    pub fn boundary_area(&self) -> f64 {
        boundary_area(&self.nodes)
    }

    /// Winding angle of the boundary around a point; available in either state.
    pub fn winding_number(&self, x: f64, y: f64) -> f64 {
        winding_number(&self.nodes, Node::new(x, y), &self.tol)
    }
}

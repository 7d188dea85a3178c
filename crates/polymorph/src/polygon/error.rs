use std::fmt;

use crate::geom::Node;

/// Errors surfaced while editing or closing a polygon.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// Closing needs at least three distinct nodes.
    TooFewNodes { count: usize },
    /// The polygon is closed; its boundary is frozen.
    AlreadyClosed,
    /// NaN or infinite coordinate passed to `add_node`.
    NonFiniteCoordinate { x: f64, y: f64 },
    /// Graph reduction went a full round without finding an ear.
    NotTriangulable { remaining: usize, triangles: usize },
    /// The two segments at an ear share both endpoints.
    DegenerateEar { node: Node },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::TooFewNodes { count } => {
                write!(f, "polygon must have at least 3 nodes to close (has {count})")
            }
            PolygonError::AlreadyClosed => write!(f, "polygon is already closed"),
            PolygonError::NonFiniteCoordinate { x, y } => {
                write!(f, "node coordinates must be finite (got ({x}, {y}))")
            }
            PolygonError::NotTriangulable {
                remaining,
                triangles,
            } => write!(
                f,
                "polygon is not triangulable: {remaining} nodes left without an ear \
                 after {triangles} triangles"
            ),
            PolygonError::DegenerateEar { node } => write!(
                f,
                "ear at ({}, {}) does not span a triangle",
                node.x, node.y
            ),
        }
    }
}

impl std::error::Error for PolygonError {}

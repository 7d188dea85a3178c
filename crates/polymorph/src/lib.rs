//! Polygon closing and triangulation.
//!
//! Points are clicked one by one into an open `Polygon`; closing it connects
//! the boundary with crossing-free diagonals, prunes the ones through exterior
//! space with a winding-number test, and peels the resulting graph into
//! triangles. The mesh then answers point-in-polygon queries.
//!
//! Layout
//! - `geom`: points, segments, intersection predicates, tolerances, sampler.
//! - `polygon`: the closing pipeline and containment queries.
//! - `sketch`: click semantics over many polygons.
//!
//! API Policy
//! - Workspace-internal; no stability promise beyond what the CLI needs.

pub mod geom;
pub mod polygon;
pub mod sketch;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Line, Node, Tolerances};
pub use polygon::{Polygon, PolygonError, Triangle};
pub use sketch::Sketch;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom::{Line, LineEquation, Node, Tolerances};
    pub use crate::polygon::{is_interior, winding_number, Polygon, PolygonError, Triangle};
    pub use crate::sketch::Sketch;
}

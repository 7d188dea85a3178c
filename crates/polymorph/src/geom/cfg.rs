//! Tolerances for 2D predicates.
//!
//! Policy
//! - Values are absolute and tuned for pixel-scale coordinates (polygons drawn
//!   with a mouse on a window of a few hundred pixels). Rescaled inputs need
//!   rescaled tolerances.
//! - `parallel` is the one relative tolerance: it compares the cross product of
//!   two directions against the product of their lengths.

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    /// A point closer than this to a segment endpoint touches the endpoint
    /// rather than the segment interior.
    pub endpoint: f64,
    /// A boundary node closer than this to a probe point contributes no angle
    /// to the winding sum.
    pub coincident: f64,
    /// Max distance of a point from a segment's line to count as on it.
    pub on_line: f64,
    /// Relative cross-product threshold below which two directions are parallel.
    pub parallel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            endpoint: 0.01,
            coincident: 1e-3,
            on_line: 1e-4,
            parallel: 1e-12,
        }
    }
}

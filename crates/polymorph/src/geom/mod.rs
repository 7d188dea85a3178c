//! Pixel-scale 2D primitives for polygon closing.
//!
//! Purpose
//! - Provide the value types (`Node`, `Line`) and predicates (crosspoint,
//!   crossing, orientation, angle) that the closing phases are built from.
//! - Keep every tolerance explicit through `Tolerances`.
//!
//! Conventions
//! - Nodes are compared exactly; segment predicates use absolute tolerances.
//! - Vertical lines are a distinct `LineEquation` variant, never an infinite slope.
//! - Nothing is memoized: predicates are recomputed on each call.

mod cfg;
pub mod rand;
mod types;
mod util;

pub use cfg::Tolerances;
pub use types::{Line, LineEquation, Node};
pub use util::{angle_at, boundary_area, crosspoint, direction, lines_crossing};

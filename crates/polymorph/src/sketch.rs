//! Click-driven drawing session over a list of polygons.
//!
//! Purpose
//! - Model the interactive loop without a window: primary clicks add points,
//!   a secondary click adds a last point and closes, the cursor hit-tests.
//!
//! Policy
//! - Only the last polygon can be open. A primary click after a close starts
//!   a new polygon.
//! - A failed close keeps the polygon open (with the finishing point added)
//!   so the user can keep editing.

use rand::Rng;

use crate::geom::rand::ReplayToken;
use crate::geom::Tolerances;
use crate::polygon::{Polygon, PolygonError, Triangle};

#[derive(Clone, Debug, Default)]
pub struct Sketch {
    polygons: Vec<Polygon>,
    tol: Tolerances,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tolerances handed to every polygon this session starts.
    pub fn with_tolerances(tol: Tolerances) -> Self {
        Self {
            polygons: Vec::new(),
            tol,
        }
    }

    fn open_mut(&mut self) -> Option<&mut Polygon> {
        self.polygons.last_mut().filter(|p| !p.is_closed())
    }

    /// Primary click.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<bool, PolygonError> {
        if let Some(p) = self.open_mut() {
            return p.add_node(x, y);
        }
        let mut p = Polygon::with_tolerances(self.tol);
        let added = p.add_node(x, y)?;
        self.polygons.push(p);
        Ok(added)
    }

    /// Secondary click: add the point and close. `Ok(false)` when nothing is open.
    pub fn finish_with_rng<R: Rng + ?Sized>(
        &mut self,
        x: f64,
        y: f64,
        rng: &mut R,
    ) -> Result<bool, PolygonError> {
        let index = self.polygons.len().saturating_sub(1);
        let Some(p) = self.open_mut() else {
            return Ok(false);
        };
        p.add_node(x, y)?;
        if let Err(e) = p.close_with_rng(rng) {
            tracing::warn!(polygon = index, nodes = p.nodes().len(), error = %e, "close failed");
            return Err(e);
        }
        Ok(true)
    }

    pub fn finish(&mut self, x: f64, y: f64) -> Result<bool, PolygonError> {
        self.finish_with_rng(x, y, &mut rand::thread_rng())
    }

    pub fn finish_replay(
        &mut self,
        x: f64,
        y: f64,
        tok: ReplayToken,
    ) -> Result<bool, PolygonError> {
        self.finish_with_rng(x, y, &mut tok.to_std_rng())
    }

    /// Drop the last point of the open polygon, if any.
    pub fn undo_point(&mut self) -> Option<crate::geom::Node> {
        let p = self.open_mut()?;
        match p.remove_last_node() {
            Ok(node) => node,
            Err(e) => {
                tracing::warn!(error = %e, "undo rejected");
                None
            }
        }
    }

    /// The open polygon, if one is being drawn.
    pub fn current(&self) -> Option<&Polygon> {
        self.polygons.last().filter(|p| !p.is_closed())
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// First closed polygon (in drawing order) with a triangle under the cursor.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<(usize, &Triangle)> {
        self.polygons
            .iter()
            .enumerate()
            .find_map(|(i, p)| p.select_triangle(x, y).map(|t| (i, t)))
    }
}

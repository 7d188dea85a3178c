//! JSON file formats for polygons, click scripts and meshes.
//!
//! Points are written as `[x, y]` pairs throughout.

use anyhow::{Context, Result};
use polymorph::{Line, Node, Polygon, Triangle};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub type Point = [f64; 2];

fn point(n: Node) -> Point {
    [n.x, n.y]
}

fn segment(l: &Line) -> [Point; 2] {
    [point(l.p1()), point(l.p2())]
}

fn corners(t: &Triangle) -> [Point; 3] {
    t.nodes().map(point)
}

/// Boundary in click order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonFile {
    pub nodes: Vec<Point>,
}

impl PolygonFile {
    pub fn from_nodes(nodes: &[Node]) -> Self {
        Self {
            nodes: nodes.iter().copied().map(point).collect(),
        }
    }

    pub fn to_polygon(&self) -> Result<Polygon> {
        let p = Polygon::from_nodes(self.nodes.iter().map(|&[x, y]| Node::new(x, y)))?;
        Ok(p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Click {
    pub button: Button,
    pub x: f64,
    pub y: f64,
}

/// A polygon and whatever closing produced for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshFile {
    pub nodes: Vec<Point>,
    pub edges: Vec<[Point; 2]>,
    pub diagonals: Vec<[Point; 2]>,
    pub triangles: Vec<[Point; 3]>,
    pub area: f64,
    pub closed: bool,
    pub seed: Option<u64>,
}

impl MeshFile {
    pub fn from_polygon(p: &Polygon, seed: Option<u64>) -> Self {
        Self {
            nodes: p.nodes().iter().copied().map(point).collect(),
            edges: p.edges().iter().map(segment).collect(),
            diagonals: p.diagonals().iter().map(segment).collect(),
            triangles: p.triangles().iter().map(corners).collect(),
            area: p.area(),
            closed: p.is_closed(),
            seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchFile {
    pub polygons: Vec<MeshFile>,
}

/// Answer of the `inside` subcommand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsideAnswer {
    pub inside: bool,
    pub triangle: Option<[Point; 3]>,
    pub winding: f64,
}

impl InsideAnswer {
    pub fn query(p: &Polygon, x: f64, y: f64) -> Self {
        let triangle = p.select_triangle(x, y).map(corners);
        Self {
            inside: triangle.is_some(),
            triangle,
            winding: p.winding_number(x, y),
        }
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymorph::geom::rand::ReplayToken;
    use tempfile::tempdir;

    #[test]
    fn click_script_parses() {
        let text = r#"[
            {"button": "primary", "x": 1.0, "y": 2.0},
            {"button": "secondary", "x": 3, "y": 4}
        ]"#;
        let clicks: Vec<Click> = serde_json::from_str(text).unwrap();
        assert_eq!(clicks[0].button, Button::Primary);
        assert_eq!(clicks[1].button, Button::Secondary);
        assert_eq!((clicks[1].x, clicks[1].y), (3.0, 4.0));
        let middle = r#"[{"button":"middle","x":0,"y":0}]"#;
        assert!(serde_json::from_str::<Vec<Click>>(middle).is_err());
    }

    #[test]
    fn mesh_of_closed_square() {
        let file = PolygonFile {
            nodes: vec![[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]],
        };
        let mut p = file.to_polygon().unwrap();
        p.close_replay(ReplayToken::new(4)).unwrap();
        let mesh = MeshFile::from_polygon(&p, Some(4));
        assert_eq!(mesh.nodes, file.nodes);
        assert_eq!(mesh.edges.len(), 4);
        assert_eq!(mesh.diagonals.len(), 1);
        assert_eq!(mesh.triangles.len(), 2);
        assert!((mesh.area - 10_000.0).abs() < 1e-9);

        let v = serde_json::to_value(&mesh).unwrap();
        for key in ["nodes", "edges", "diagonals", "triangles", "area", "seed"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
        assert_eq!(v["edges"][0], serde_json::json!([[0.0, 0.0], [100.0, 0.0]]));
    }

    #[test]
    fn inside_answer_outside_point() {
        let file = PolygonFile {
            nodes: vec![[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]],
        };
        let mut p = file.to_polygon().unwrap();
        p.close_replay(ReplayToken::new(0)).unwrap();
        let a = InsideAnswer::query(&p, 150.0, 50.0);
        assert!(!a.inside && a.triangle.is_none());
        assert_eq!(a.winding, 0.0);
        assert!(InsideAnswer::query(&p, 50.0, 50.0).inside);
    }

    #[test]
    fn json_files_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/poly.json");
        let file = PolygonFile {
            nodes: vec![[1.5, 2.5], [3.0, 4.0], [5.0, 0.0]],
        };
        write_json(&path, &file).unwrap();
        let back: PolygonFile = read_json(&path).unwrap();
        assert_eq!(back, file);
        let err = read_json::<PolygonFile>(&dir.path().join("missing.json")).unwrap_err();
        assert!(format!("{err:#}").contains("missing.json"));
    }
}

mod io;
mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polymorph::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use polymorph::Sketch;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::io::{Button, Click, InsideAnswer, MeshFile, PolygonFile, SketchFile};
use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "polymorph-cli")]
#[command(about = "Close polygons into triangle meshes and query them")]
struct Cmd {
    /// Log every closing phase
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Close a polygon file and write its mesh
    Close {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Replay a click script through a drawing session
    Replay {
        #[arg(long)]
        clicks: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Close a polygon file and test one point against the mesh
    Inside {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Sample a random star-shaped polygon file
    Random {
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version and provenance JSON
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Close { input, out, seed } => close(&input, &out, seed).map(|_| ()),
        Action::Replay { clicks, out, seed } => replay(&clicks, &out, seed).map(|_| ()),
        Action::Inside { input, x, y, seed } => {
            let answer = inside(&input, x, y, seed)?;
            println!("{}", serde_json::to_string_pretty(&answer)?);
            Ok(())
        }
        Action::Random {
            vertices,
            seed,
            out,
        } => random(vertices, seed, &out).map(|_| ()),
        Action::Report => report(),
    }
}

fn close(input: &Path, out: &Path, seed: u64) -> Result<MeshFile> {
    tracing::info!(input = %input.display(), out = %out.display(), seed, "close");
    let file: PolygonFile = io::read_json(input)?;
    let mut polygon = file.to_polygon()?;
    polygon
        .close_replay(ReplayToken::new(seed))
        .with_context(|| format!("closing {}", input.display()))?;
    let mesh = MeshFile::from_polygon(&polygon, Some(seed));
    io::write_json(out, &mesh)?;

    let payload = Payload::new("close", json!({ "input": input.to_string_lossy() }))
        .seed(seed)
        .stats(json!({
            "nodes": mesh.nodes.len(),
            "diagonals": mesh.diagonals.len(),
            "triangles": mesh.triangles.len(),
            "area": mesh.area,
        }));
    provenance::write_sidecar(out, payload)?;
    Ok(mesh)
}

fn replay(clicks_path: &Path, out: &Path, seed: u64) -> Result<SketchFile> {
    tracing::info!(clicks = %clicks_path.display(), out = %out.display(), seed, "replay");
    let clicks: Vec<Click> = io::read_json(clicks_path)?;
    let mut sketch = Sketch::new();
    let mut failed = 0usize;
    for click in &clicks {
        let result = match click.button {
            Button::Primary => sketch.add_point(click.x, click.y).map(|_| ()),
            Button::Secondary => {
                // One token per polygon keeps each close reproducible on its own.
                let index = sketch.polygons().len().saturating_sub(1) as u64;
                sketch
                    .finish_replay(click.x, click.y, ReplayToken { seed, index })
                    .map(|_| ())
            }
        };
        if let Err(e) = result {
            failed += 1;
            tracing::warn!(x = click.x, y = click.y, error = %e, "click rejected");
        }
    }
    let file = SketchFile {
        polygons: sketch
            .polygons()
            .iter()
            .map(|p| MeshFile::from_polygon(p, p.is_closed().then_some(seed)))
            .collect(),
    };
    io::write_json(out, &file)?;

    let closed = file.polygons.iter().filter(|m| m.closed).count();
    let payload = Payload::new("replay", json!({ "clicks": clicks_path.to_string_lossy() }))
        .seed(seed)
        .stats(json!({
            "clicks": clicks.len(),
            "rejected": failed,
            "polygons": file.polygons.len(),
            "closed": closed,
        }));
    provenance::write_sidecar(out, payload)?;
    Ok(file)
}

fn inside(input: &Path, x: f64, y: f64, seed: u64) -> Result<InsideAnswer> {
    let file: PolygonFile = io::read_json(input)?;
    let mut polygon = file.to_polygon()?;
    polygon
        .close_replay(ReplayToken::new(seed))
        .with_context(|| format!("closing {}", input.display()))?;
    let answer = InsideAnswer::query(&polygon, x, y);
    tracing::info!(x, y, inside = answer.inside, "inside");
    Ok(answer)
}

fn random(vertices: usize, seed: u64, out: &Path) -> Result<PolygonFile> {
    tracing::info!(vertices, seed, out = %out.display(), "random");
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let nodes = draw_polygon_radial(cfg, ReplayToken::new(seed));
    let file = PolygonFile::from_nodes(&nodes);
    io::write_json(out, &file)?;
    let payload = Payload::new("random", json!({ "vertices": vertices, "sampler": "radial" }))
        .seed(seed)
        .stats(json!({ "nodes": file.nodes.len() }));
    provenance::write_sidecar(out, payload)?;
    Ok(file)
}

fn report() -> Result<()> {
    let obj = json!({
        "build": provenance::build_info(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const L_SHAPE: &str = r#"{"nodes": [[0,0],[0,100],[50,100],[50,50],[100,50],[100,0]]}"#;

    #[test]
    fn cli_parses_subcommands() {
        let cmd = Cmd::try_parse_from([
            "polymorph-cli", "-v", "inside", "--input", "p.json", "--x", "-3.5", "--y", "2",
        ])
        .unwrap();
        assert!(cmd.verbose);
        match cmd.action {
            Action::Inside { x, y, seed, .. } => assert_eq!((x, y, seed), (-3.5, 2.0, 0)),
            _ => panic!("expected inside"),
        }
        assert!(Cmd::try_parse_from(["polymorph-cli", "close", "--input", "p.json"]).is_err());
    }

    #[test]
    fn usage_names_the_binary() {
        use clap::CommandFactory;
        let cmd = Cmd::command();
        assert_eq!(cmd.get_name(), env!("CARGO_BIN_NAME"));
        cmd.debug_assert();
    }

    #[test]
    fn close_writes_mesh_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("l.json");
        fs::write(&input, L_SHAPE).unwrap();
        let out = dir.path().join("out/l.mesh.json");
        let mesh = close(&input, &out, 3).unwrap();
        assert_eq!(mesh.triangles.len(), 4);
        assert!((mesh.area - 7500.0).abs() < 1e-9);

        let written: MeshFile = io::read_json(&out).unwrap();
        assert_eq!(written, mesh);
        let sidecar = dir.path().join("out/l.mesh.provenance.json");
        let prov: serde_json::Value = serde_json::from_slice(&fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(prov["seed"], 3);
        assert_eq!(prov["stats"]["triangles"], 4);
    }

    #[test]
    fn close_reports_too_few_nodes() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("seg.json");
        fs::write(&input, r#"{"nodes": [[0,0],[1,1]]}"#).unwrap();
        let err = close(&input, &dir.path().join("m.json"), 0).unwrap_err();
        assert!(format!("{err:#}").contains("at least 3"), "{err:#}");
        assert!(!dir.path().join("m.json").exists());
    }

    #[test]
    fn inside_answers_notch() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("l.json");
        fs::write(&input, L_SHAPE).unwrap();
        assert!(!inside(&input, 75.0, 75.0, 1).unwrap().inside);
        let hit = inside(&input, 25.0, 25.0, 1).unwrap();
        assert!(hit.inside && hit.triangle.is_some());
    }

    #[test]
    fn replay_builds_sketch() {
        let dir = tempdir().unwrap();
        let clicks = dir.path().join("clicks.json");
        fs::write(
            &clicks,
            r#"[
                {"button": "secondary", "x": 5, "y": 5},
                {"button": "primary", "x": 0, "y": 0},
                {"button": "primary", "x": 100, "y": 0},
                {"button": "primary", "x": 100, "y": 100},
                {"button": "secondary", "x": 0, "y": 100},
                {"button": "primary", "x": 300, "y": 300},
                {"button": "primary", "x": 400, "y": 300}
            ]"#,
        )
        .unwrap();
        let out = dir.path().join("sketch.json");
        let file = replay(&clicks, &out, 8).unwrap();
        assert_eq!(file.polygons.len(), 2);
        assert!(file.polygons[0].closed);
        assert_eq!(file.polygons[0].triangles.len(), 2);
        assert!(!file.polygons[1].closed);
        assert_eq!(file.polygons[1].nodes.len(), 2);
        assert!(dir.path().join("sketch.provenance.json").exists());
    }

    #[test]
    fn random_polygon_closes() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("rand.json");
        let file = random(3, 5, &out).unwrap();
        assert_eq!(file.nodes.len(), 3);
        let mesh = close(&out, &dir.path().join("rand.mesh.json"), 5).unwrap();
        assert_eq!(mesh.triangles.len(), 1);
    }
}

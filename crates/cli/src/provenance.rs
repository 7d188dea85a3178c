//! `<artifact>.provenance.json` sidecars: what produced an output file.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a subcommand did, as recorded next to its output.
pub struct Payload {
    pub command: &'static str,
    pub seed: Option<u64>,
    pub params: Value,
    pub stats: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            seed: None,
            params,
            stats: Value::Null,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn stats(mut self, stats: Value) -> Self {
        self.stats = stats;
        self
    }
}

/// Version block shared by sidecars and `report`.
pub fn build_info() -> Value {
    json!({
        "code_rev": current_git_rev(),
        "polymorph": polymorph::VERSION,
        "cli": env!("CARGO_PKG_VERSION"),
    })
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "build": build_info(),
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "seed": payload.seed,
        "params": payload.params,
        "stats": payload.stats,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance");
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_mesh() {
        let derived = provenance_path(Path::new("/tmp/out/square.mesh.json"));
        assert_eq!(derived, Path::new("/tmp/out/square.mesh.provenance.json"));
    }

    #[test]
    fn sidecar_records_seed_and_stats() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("mesh.json");
        fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("close", json!({"input": "poly.json"}))
            .seed(9)
            .stats(json!({"triangles": 2}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert_eq!(prov_path, dir.path().join("mesh.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "close");
        assert_eq!(parsed["seed"], 9);
        assert_eq!(parsed["stats"]["triangles"], 2);
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["build"]["polymorph"], polymorph::VERSION);
    }
}

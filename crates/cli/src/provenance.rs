//! Provenance blocks: what produced an artifact, printed by `report` and
//! written next to every file the CLI creates.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub graham_version: &'static str,
    pub params: Value,
    pub summary: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    pub fn new(params: impl Serialize) -> Result<Self> {
        Ok(Self {
            code_rev: current_git_rev(),
            graham_version: graham::VERSION,
            params: serde_json::to_value(params)?,
            summary: Value::Null,
            outputs: Vec::new(),
        })
    }

    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }

    /// Record `artifact` as the output and write `<stem>.provenance.json`
    /// beside it. Returns the sidecar path.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        let path = sidecar_path(artifact);
        crate::io::ensure_parent(&path)?;
        self.outputs.push(artifact.to_string_lossy().into_owned());
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .filter(|rev| !rev.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    Some(String::from_utf8(out.stdout).ok()?.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_replaces_the_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/points.csv")),
            Path::new("/tmp/output/points.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("runs/hull")),
            Path::new("runs/hull.provenance.json")
        );
    }

    #[test]
    fn write_beside_records_params_summary_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("hull.json");
        fs::write(&artifact, "{}").unwrap();
        let path = Provenance::new(json!({"count": 10}))
            .unwrap()
            .with_summary(json!({"vertices": 4}))
            .write_beside(&artifact)
            .unwrap();
        assert_eq!(path, dir.path().join("hull.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["count"], 10);
        assert_eq!(parsed["summary"]["vertices"], 4);
        assert_eq!(parsed["graham_version"], graham::VERSION);
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }

    #[test]
    fn report_block_has_no_outputs() {
        let block = serde_json::to_value(Provenance::new(json!({"seed": 3})).unwrap()).unwrap();
        assert_eq!(block["outputs"], json!([]));
        assert_eq!(block["summary"], Value::Null);
        assert_eq!(block["params"]["seed"], 3);
    }
}

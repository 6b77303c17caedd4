//! Run configuration: defaults, optional JSON file, then flag overrides.

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use graham::api::{GenCfg, SamplePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Region the sampled points are restricted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Random,
    Heart,
    Square,
    Circle,
    Triangle,
}

/// Everything one generation + hull run needs. Passed by value, never global.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub count: usize,
    pub width: i64,
    pub height: i64,
    pub shape: ShapeKind,
    pub seed: u64,
    /// Resample until `count` points are inside the shape, at most this many draws.
    pub max_attempts: Option<usize>,
    /// Pause between emitted snapshots (presentation only).
    pub delay_ms: u64,
    /// Engine steps per emitted snapshot (presentation only).
    pub step_size: usize,
    /// Regenerate and rerun after each completed hull.
    pub loop_forever: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: 100,
            width: 500,
            height: 500,
            shape: ShapeKind::Random,
            seed: 0,
            max_attempts: None,
            delay_ms: 10,
            step_size: 1,
            loop_forever: false,
        }
    }
}

impl RunConfig {
    /// Defaults, overlaid by the JSON file at `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        let cfg: RunConfig = serde_json::from_slice(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.step_size == 0 {
            bail!("step_size must be at least 1");
        }
        self.gen_cfg().validate()?;
        Ok(())
    }

    pub fn gen_cfg(&self) -> GenCfg {
        GenCfg {
            count: self.count,
            width: self.width,
            height: self.height,
            policy: match self.max_attempts {
                Some(max_attempts) => SamplePolicy::UntilCount { max_attempts },
                None => SamplePolicy::SinglePass,
            },
        }
    }
}

/// Sampling flags shared by `generate` and `animate`.
#[derive(Args, Clone, Debug, Default)]
pub struct SampleArgs {
    /// Number of candidate points to draw
    #[arg(long)]
    pub count: Option<usize>,
    /// Bounding box width
    #[arg(long)]
    pub width: Option<i64>,
    /// Bounding box height
    #[arg(long)]
    pub height: Option<i64>,
    /// Region restricting the points
    #[arg(long, value_enum)]
    pub shape: Option<ShapeKind>,
    /// Replay seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Resample until the count is met, giving up after this many draws
    #[arg(long)]
    pub max_attempts: Option<usize>,
}

impl SampleArgs {
    pub fn apply(&self, cfg: &mut RunConfig) {
        if let Some(v) = self.count {
            cfg.count = v;
        }
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = self.shape {
            cfg.shape = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = v;
        }
        if self.max_attempts.is_some() {
            cfg.max_attempts = self.max_attempts;
        }
    }
}

/// Pacing flags for `animate`.
#[derive(Args, Clone, Debug, Default)]
pub struct PaceArgs {
    /// Milliseconds to sleep after each emitted snapshot
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// Engine steps per emitted snapshot
    #[arg(long)]
    pub step_size: Option<usize>,
    /// Keep regenerating and rerunning
    #[arg(long)]
    pub loop_forever: bool,
}

impl PaceArgs {
    pub fn apply(&self, cfg: &mut RunConfig) {
        if let Some(v) = self.delay_ms {
            cfg.delay_ms = v;
        }
        if let Some(v) = self.step_size {
            cfg.step_size = v;
        }
        if self.loop_forever {
            cfg.loop_forever = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_values_overlay_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.json");
        fs::write(&path, r#"{"count": 42, "shape": "heart", "max_attempts": 1000}"#).unwrap();
        let cfg = RunConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.count, 42);
        assert_eq!(cfg.shape, ShapeKind::Heart);
        assert_eq!(cfg.width, 500);
        assert_eq!(
            cfg.gen_cfg().policy,
            SamplePolicy::UntilCount { max_attempts: 1000 }
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"amount": 3}"#).unwrap();
        assert!(RunConfig::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn flags_override_file() {
        let mut cfg = RunConfig::default();
        SampleArgs {
            count: Some(7),
            shape: Some(ShapeKind::Circle),
            ..SampleArgs::default()
        }
        .apply(&mut cfg);
        PaceArgs {
            step_size: Some(5),
            loop_forever: true,
            ..PaceArgs::default()
        }
        .apply(&mut cfg);
        assert_eq!(cfg.count, 7);
        assert_eq!(cfg.shape, ShapeKind::Circle);
        assert_eq!(cfg.step_size, 5);
        assert!(cfg.loop_forever);
        assert_eq!(cfg.gen_cfg().policy, SamplePolicy::SinglePass);
    }

    #[test]
    fn validation() {
        assert!(RunConfig::default().validate().is_ok());
        let zero_step = RunConfig {
            step_size: 0,
            ..RunConfig::default()
        };
        assert!(zero_step.validate().is_err());
        let flat = RunConfig {
            height: 0,
            ..RunConfig::default()
        };
        assert!(flat.validate().is_err());
    }
}

//! Uniform random point sets inside a bounding box, optionally gated by a region.
//!
//! Model
//! - Draw `(x, y)` uniformly with `0 <= x < width`, `0 <= y < height`.
//! - With a region, keep only admissible samples. `SamplePolicy::SinglePass`
//!   draws exactly `count` candidates and may return fewer points;
//!   `SamplePolicy::UntilCount` keeps drawing until `count` points are found
//!   or the attempt budget is spent, and then fails explicitly.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `region::{Region, region_contains}`, `hull::compute_hull`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::geom2::{pt, PointSet};
use crate::region::{region_contains, Region};

/// Upper bound on requested point counts.
pub const MAX_POINT_COUNT: usize = 100_000;
/// Upper bound on the bounding box side length. Keeps every coordinate well
/// inside the exact range of the cross product.
pub const MAX_EXTENT: i64 = 1 << 31;

/// Error type for point-set generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    InvalidConfiguration {
        reason: String,
    },
    RegionSamplingExhausted {
        requested: usize,
        found: usize,
        attempts: usize,
    },
}

impl GenerateError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid generator configuration: {reason}")
            }
            Self::RegionSamplingExhausted {
                requested,
                found,
                attempts,
            } => write!(
                f,
                "region sampling exhausted: found {found} of {requested} points after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// How rejected samples are handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SamplePolicy {
    /// Draw `count` candidates once; rejected ones are not replaced.
    #[default]
    SinglePass,
    /// Redraw until `count` admissible points exist, at most `max_attempts` draws.
    UntilCount { max_attempts: usize },
}

/// Generator configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenCfg {
    pub count: usize,
    pub width: i64,
    pub height: i64,
    pub policy: SamplePolicy,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            count: 100,
            width: 500,
            height: 500,
            policy: SamplePolicy::SinglePass,
        }
    }
}

impl GenCfg {
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GenerateError::invalid(format!(
                "bounding box must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_EXTENT || self.height > MAX_EXTENT {
            return Err(GenerateError::invalid(format!(
                "bounding box side exceeds {MAX_EXTENT}"
            )));
        }
        if self.count > MAX_POINT_COUNT {
            return Err(GenerateError::invalid(format!(
                "point count {} exceeds {MAX_POINT_COUNT}",
                self.count
            )));
        }
        if let SamplePolicy::UntilCount { max_attempts } = self.policy {
            if max_attempts < self.count {
                return Err(GenerateError::invalid(format!(
                    "max_attempts {max_attempts} is below the requested count {}",
                    self.count
                )));
            }
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next run in a sequence with the same seed.
    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Sample a point set reproducibly from `tok`.
pub fn generate(
    cfg: &GenCfg,
    region: Option<&dyn Region>,
    tok: ReplayToken,
) -> Result<PointSet, GenerateError> {
    let mut rng = tok.to_std_rng();
    generate_with_rng(cfg, region, &mut rng)
}

/// Sample a point set from a caller-supplied RNG.
pub fn generate_with_rng<R: Rng>(
    cfg: &GenCfg,
    region: Option<&dyn Region>,
    rng: &mut R,
) -> Result<PointSet, GenerateError> {
    cfg.validate()?;
    let mut draw = || pt(rng.gen_range(0..cfg.width), rng.gen_range(0..cfg.height));
    let admissible = |p: &_| region.map_or(true, |r| region_contains(r, p));

    match cfg.policy {
        SamplePolicy::SinglePass => {
            let mut out = Vec::with_capacity(cfg.count);
            for _ in 0..cfg.count {
                let p = draw();
                if admissible(&p) {
                    out.push(p);
                }
            }
            tracing::debug!(
                requested = cfg.count,
                kept = out.len(),
                "single-pass sample"
            );
            Ok(out)
        }
        SamplePolicy::UntilCount { max_attempts } => {
            let mut out = Vec::with_capacity(cfg.count);
            let mut attempts = 0usize;
            while out.len() < cfg.count {
                if attempts >= max_attempts {
                    tracing::debug!(
                        requested = cfg.count,
                        found = out.len(),
                        attempts,
                        "region sampling exhausted"
                    );
                    return Err(GenerateError::RegionSamplingExhausted {
                        requested: cfg.count,
                        found: out.len(),
                        attempts,
                    });
                }
                attempts += 1;
                let p = draw();
                if admissible(&p) {
                    out.push(p);
                }
            }
            tracing::debug!(requested = cfg.count, attempts, "resampled to count");
            Ok(out)
        }
    }
}

mod config;
mod io;
mod output;
mod provenance;
mod shapes;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graham::api::{compute_hull, generate_with_rng, HullScan, Point, ReplayToken};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::fmt::SubscriberBuilder;

use config::{PaceArgs, RunConfig, SampleArgs};
use output::{Frame, HullReport};
use provenance::Provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Graham scan convex hull runner")]
struct Cmd {
    /// Optional JSON run configuration; flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample a point set and write it as x,y CSV
    Generate {
        #[command(flatten)]
        sample: SampleArgs,
        #[arg(long)]
        out: PathBuf,
    },
    /// Compute the hull of a CSV point set
    Hull {
        #[arg(long)]
        input: PathBuf,
        /// Write the hull JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Generate points and stream one JSON frame per step batch
    Animate {
        #[command(flatten)]
        sample: SampleArgs,
        #[command(flatten)]
        pace: PaceArgs,
        /// Stop a looping animation after this many runs
        #[arg(long)]
        runs: Option<u64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let mut cfg = RunConfig::load(cmd.config.as_deref())?;
    match cmd.action {
        Action::Generate { sample, out } => {
            sample.apply(&mut cfg);
            generate_cmd(&cfg, &out)
        }
        Action::Hull { input, out } => hull_cmd(&input, out.as_deref()),
        Action::Animate { sample, pace, runs } => {
            sample.apply(&mut cfg);
            pace.apply(&mut cfg);
            animate_cmd(&cfg, runs)
        }
        Action::Report => report(&cfg),
    }
}

/// Region + points for run `tok`. Shape and samples share one RNG stream.
fn sample_points(cfg: &RunConfig, tok: ReplayToken) -> Result<Vec<Point>> {
    let mut rng = tok.to_std_rng();
    let region = shapes::build(cfg.shape, cfg.width, cfg.height, &mut rng);
    let points = generate_with_rng(&cfg.gen_cfg(), Some(region.as_ref()), &mut rng)?;
    tracing::info!(
        shape = ?cfg.shape,
        requested = cfg.count,
        kept = points.len(),
        index = tok.index,
        "sampled"
    );
    Ok(points)
}

fn generate_cmd(cfg: &RunConfig, out: &Path) -> Result<()> {
    cfg.validate()?;
    tracing::info!(out = %out.display(), "generate");
    let points = sample_points(cfg, ReplayToken::new(cfg.seed, 0))?;
    io::write_points_csv(out, &points)?;
    Provenance::new(cfg)?
        .with_summary(json!({ "points": points.len() }))
        .write_beside(out)?;
    Ok(())
}

fn hull_cmd(input: &Path, out: Option<&Path>) -> Result<()> {
    tracing::info!(input = %input.display(), "hull");
    let points = io::read_points_csv(input)?;
    let hull = compute_hull(&points).with_context(|| format!("hull of {}", input.display()))?;
    let report = HullReport::new(points.len(), &hull);
    tracing::info!(
        input_count = report.input_count,
        vertex_count = report.vertex_count,
        "hull complete"
    );
    match out {
        Some(out) => {
            io::ensure_parent(out)?;
            std::fs::write(out, serde_json::to_vec_pretty(&report)?)
                .with_context(|| format!("writing {}", out.display()))?;
            Provenance::new(json!({ "input": input.to_string_lossy() }))?
                .with_summary(json!({ "vertices": report.vertex_count }))
                .write_beside(out)?;
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn animate_cmd(cfg: &RunConfig, runs: Option<u64>) -> Result<()> {
    animate_to(cfg, runs, &mut std::io::stdout())
}

/// Stream JSON lines to `out`: a start frame, one frame per `step_size`
/// steps (the last one at completion), then a `{"run", "hull"}` line.
fn animate_to<W: Write>(cfg: &RunConfig, runs: Option<u64>, out: &mut W) -> Result<()> {
    cfg.validate()?;
    tracing::info!(
        delay_ms = cfg.delay_ms,
        step_size = cfg.step_size,
        loop_forever = cfg.loop_forever,
        "animate"
    );
    let mut tok = ReplayToken::new(cfg.seed, 0);
    let mut run = 0u64;
    loop {
        let points = sample_points(cfg, tok)?;
        let mut scan = HullScan::new(&points)
            .with_context(|| format!("run {run}: shape left no points"))?;
        emit(out, &Frame::capture(run, &scan, None))?;
        let mut pending = 0usize;
        while !scan.is_complete() {
            let event = scan.step();
            pending += 1;
            if pending >= cfg.step_size || scan.is_complete() {
                emit(out, &Frame::capture(run, &scan, Some(event)))?;
                pending = 0;
                pace(cfg.delay_ms);
            }
        }
        if let Some(hull) = scan.result() {
            let report = HullReport::new(points.len(), hull);
            serde_json::to_writer(&mut *out, &json!({ "run": run, "hull": report }))?;
            writeln!(out)?;
        }
        run += 1;
        if !cfg.loop_forever || runs.is_some_and(|n| run >= n) {
            break;
        }
        tok = tok.next_index();
    }
    Ok(())
}

fn emit<W: Write>(out: &mut W, frame: &Frame) -> Result<()> {
    serde_json::to_writer(&mut *out, frame)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn pace(delay_ms: u64) {
    if delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(delay_ms));
    }
}

fn report(cfg: &RunConfig) -> Result<()> {
    let block = Provenance::new(cfg)?;
    println!("{}", serde_json::to_string_pretty(&block)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::ShapeKind;
    use tempfile::tempdir;

    #[test]
    fn generate_then_hull_round_trip() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("points.csv");
        let cfg = RunConfig {
            count: 200,
            shape: ShapeKind::Circle,
            seed: 11,
            ..RunConfig::default()
        };
        generate_cmd(&cfg, &csv).unwrap();
        assert!(dir.path().join("points.provenance.json").exists());

        let out = dir.path().join("hull.json");
        hull_cmd(&csv, Some(out.as_path())).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        let verts = parsed["vertices"].as_array().unwrap();
        assert_eq!(verts.first(), verts.last());
        assert!(parsed["vertex_count"].as_u64().unwrap() >= 3);
        assert!(dir.path().join("hull.provenance.json").exists());
    }

    #[test]
    fn samples_are_reproducible_per_token() {
        let cfg = RunConfig {
            shape: ShapeKind::Heart,
            max_attempts: Some(10_000),
            ..RunConfig::default()
        };
        let a = sample_points(&cfg, ReplayToken::new(4, 2)).unwrap();
        let b = sample_points(&cfg, ReplayToken::new(4, 2)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), cfg.count);
    }

    #[test]
    fn hull_rejects_coordinates_beyond_the_exact_range() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("big.csv");
        std::fs::write(
            &csv,
            format!(
                "x,y\n{min},{min}\n{max},{min}\n0,{max}\n1,1\n",
                min = i64::MIN,
                max = i64::MAX
            ),
        )
        .unwrap();
        let err = hull_cmd(&csv, None).unwrap_err();
        assert!(format!("{err:#}").contains("outside the supported range"));
    }

    fn animate_lines(cfg: &RunConfig, runs: Option<u64>) -> Vec<serde_json::Value> {
        let mut buf = Vec::new();
        animate_to(cfg, runs, &mut buf).unwrap();
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn quiet_cfg(step_size: usize) -> RunConfig {
        RunConfig {
            count: 30,
            shape: ShapeKind::Square,
            seed: 5,
            delay_ms: 0,
            step_size,
            ..RunConfig::default()
        }
    }

    #[test]
    fn animate_batches_frames_by_step_size() {
        let cfg = quiet_cfg(1);
        let points = sample_points(&cfg, ReplayToken::new(cfg.seed, 0)).unwrap();
        let total = HullScan::new(&points).unwrap().run_to_completion();

        for step_size in [1, 3] {
            let lines = animate_lines(&quiet_cfg(step_size), None);
            let (frames, hulls): (Vec<_>, Vec<_>) =
                lines.iter().partition(|v| v.get("hull").is_none());
            // Start frame, one per full batch, and a final partial batch.
            assert_eq!(frames.len(), 1 + total.div_ceil(step_size));
            assert_eq!(frames[0]["event"], "Start");
            let last = frames.last().unwrap();
            assert_eq!(last["phase"], "Complete");
            assert_eq!(last["step"].as_u64().unwrap() as usize, total);
            assert_eq!(hulls.len(), 1);
            assert_eq!(hulls[0]["run"], 0);
            assert_eq!(lines.last().unwrap()["hull"]["input_count"], points.len());
        }
    }

    #[test]
    fn animate_loop_stops_after_requested_runs() {
        let cfg = RunConfig {
            loop_forever: true,
            step_size: 1000,
            ..quiet_cfg(1)
        };
        let lines = animate_lines(&cfg, Some(2));
        let hulls: Vec<_> = lines.iter().filter_map(|v| v.get("hull")).collect();
        assert_eq!(hulls.len(), 2);
        assert_ne!(hulls[0]["vertices"], hulls[1]["vertices"]);
        let runs: Vec<_> = lines.iter().map(|v| v["run"].as_u64().unwrap()).collect();
        assert_eq!(runs.first(), Some(&0));
        assert_eq!(runs.last(), Some(&1));

        // Without looping a run budget changes nothing.
        let once = animate_lines(&quiet_cfg(1000), Some(5));
        assert_eq!(once.iter().filter(|v| v.get("hull").is_some()).count(), 1);
    }
}

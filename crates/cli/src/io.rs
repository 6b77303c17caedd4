//! Point sets on disk: two-column `x,y` CSV through polars.

use anyhow::{bail, Context, Result};
use graham::api::{pt, Point};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

pub fn write_points_csv(path: &Path, points: &[Point]) -> Result<()> {
    let xs: Vec<i64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<i64> = points.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = df.column("x")?.cast(&DataType::Int64)?;
    let ys = df.column("y")?.cast(&DataType::Int64)?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.i64()?.into_iter().zip(ys.i64()?.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(pt(x, y)),
            _ => bail!("missing coordinate in {} at row {row}", path.display()),
        }
    }
    Ok(points)
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

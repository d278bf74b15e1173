//! Result artifacts: JSON summary for renderers and a per-point table.

use anyhow::{bail, Context, Result};
use payoffs::api::{Analysis, Point2};
use polars::prelude::*;
use serde_json::{json, Value};
use std::fs::File;
use std::path::Path;

fn pair(p: Point2) -> Value {
    json!([p.x, p.y])
}

/// JSON summary. `hull` is open; renderers close it with its first index.
pub fn result_json(an: &Analysis) -> Value {
    let (rows, cols) = an.points.shape();
    json!({
        "shape": [rows, cols],
        "points": an.points.iter().map(pair).collect::<Vec<_>>(),
        "hull": an.hull.indices(),
        "hull_points": an.hull_points().into_iter().map(pair).collect::<Vec<_>>(),
        "hull_area": an.hull_area2() as f64 / 2.0,
        "pareto": an.pareto.iter().copied().map(pair).collect::<Vec<_>>(),
        "pareto_indices": an.pareto_idx,
    })
}

/// One row per payoff vector: source cell, coordinates, hull rank, Pareto flag.
pub fn points_frame(an: &Analysis) -> PolarsResult<DataFrame> {
    let n = an.points.len();
    let cells: Vec<(usize, usize)> = (0..n).map(|i| an.points.cell_of(i)).collect();
    df!(
        "index" => (0..n as u32).collect::<Vec<u32>>(),
        "row" => cells.iter().map(|c| c.0 as u32).collect::<Vec<u32>>(),
        "col" => cells.iter().map(|c| c.1 as u32).collect::<Vec<u32>>(),
        "x" => an.points.iter().map(|p| p.x).collect::<Vec<i32>>(),
        "y" => an.points.iter().map(|p| p.y).collect::<Vec<i32>>(),
        "hull_rank" => (0..n).map(|i| an.hull.rank_of(i).map(|r| r as u32)).collect::<Vec<Option<u32>>>(),
        "pareto" => (0..n).map(|i| an.is_pareto(i)).collect::<Vec<bool>>(),
    )
}

/// Write the table as CSV or Parquet depending on the extension.
pub fn write_points_table(path: &Path, df: &mut DataFrame) -> Result<()> {
    ensure_parent(path)?;
    let ext = path.extension().and_then(|e| e.to_str());
    if !matches!(ext, Some("csv") | Some("parquet")) {
        bail!(
            "unsupported table {} (expected .csv or .parquet)",
            path.display()
        );
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if ext == Some("csv") {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    } else {
        ParquetWriter::new(file).finish(df)?;
    }
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

//! Game input files.
//!
//! - `.json`: `{"player1": [[..], ..], "player2": [[..], ..]}`, nested rows.
//! - `.csv`: long format with header `row,col,player1,player2`, one line per
//!   cell, every cell exactly once.
//!
//! Payoffs must be integers; floats or strings are rejected, not rounded.

use anyhow::{anyhow, bail, Context, Result};
use nalgebra::DMatrix;
use payoffs::api::{matrix_from_rows, Payoff};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// JSON layout of a bimatrix game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFile {
    pub player1: Vec<Vec<Payoff>>,
    pub player2: Vec<Vec<Payoff>>,
}

impl GameFile {
    pub fn from_matrices(a: &DMatrix<Payoff>, b: &DMatrix<Payoff>) -> Self {
        let rows = |m: &DMatrix<Payoff>| {
            m.row_iter()
                .map(|r| r.iter().copied().collect())
                .collect::<Vec<Vec<Payoff>>>()
        };
        Self {
            player1: rows(a),
            player2: rows(b),
        }
    }

    pub fn matrices(&self) -> Result<(DMatrix<Payoff>, DMatrix<Payoff>)> {
        let a = matrix_from_rows(&self.player1).context("player1 matrix")?;
        let b = matrix_from_rows(&self.player2).context("player2 matrix")?;
        Ok((a, b))
    }
}

/// Load both payoff matrices, dispatching on the file extension.
pub fn load_game(path: &Path) -> Result<(DMatrix<Payoff>, DMatrix<Payoff>)> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let game: GameFile = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            game.matrices()
        }
        Some("csv") => load_long_csv(path),
        _ => bail!(
            "unsupported input {} (expected .json or .csv)",
            path.display()
        ),
    }
}

fn load_long_csv(path: &Path) -> Result<(DMatrix<Payoff>, DMatrix<Payoff>)> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let rows = int_column(&df, "row")?;
    let cols = int_column(&df, "col")?;
    let p1 = int_column(&df, "player1")?;
    let p2 = int_column(&df, "player2")?;

    let to_index = |v: i64, what: &str| {
        usize::try_from(v).map_err(|_| anyhow!("negative {what} index {v}"))
    };
    let to_payoff = |v: i64| Payoff::try_from(v).map_err(|_| anyhow!("payoff {v} out of range"));

    let mut nrows = 0usize;
    let mut ncols = 0usize;
    let mut cells = Vec::with_capacity(df.height());
    for k in 0..df.height() {
        let (i, j) = (to_index(rows[k], "row")?, to_index(cols[k], "col")?);
        nrows = nrows.max(i.saturating_add(1));
        ncols = ncols.max(j.saturating_add(1));
        cells.push((i, j, to_payoff(p1[k])?, to_payoff(p2[k])?));
    }

    // Every cell appears exactly once, so the line count fixes the grid size.
    let expected = nrows
        .checked_mul(ncols)
        .filter(|&len| len <= cells.len())
        .ok_or_else(|| {
            anyhow!(
                "{} lines cannot fill a {nrows}x{ncols} grid: cells missing",
                cells.len()
            )
        })?;
    if expected < cells.len() {
        bail!(
            "{} lines for a {nrows}x{ncols} grid: some cell listed twice",
            cells.len()
        );
    }

    let mut grid: Vec<Option<(Payoff, Payoff)>> = vec![None; nrows * ncols];
    for (i, j, u1, u2) in cells {
        let slot = &mut grid[i * ncols + j];
        if slot.is_some() {
            bail!("cell ({i}, {j}) listed twice");
        }
        *slot = Some((u1, u2));
    }
    let mut a = DMatrix::zeros(nrows, ncols);
    let mut b = DMatrix::zeros(nrows, ncols);
    for i in 0..nrows {
        for j in 0..ncols {
            let (u1, u2) = grid[i * ncols + j].ok_or_else(|| anyhow!("cell ({i}, {j}) missing"))?;
            a[(i, j)] = u1;
            b[(i, j)] = u2;
        }
    }
    Ok((a, b))
}

fn int_column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let s = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?;
    if !s.dtype().is_integer() {
        bail!("column `{name}` must hold integers, found {}", s.dtype());
    }
    let s = s.cast(&DataType::Int64)?;
    s.i64()?
        .into_iter()
        .enumerate()
        .map(|(k, v)| v.ok_or_else(|| anyhow!("empty `{name}` at line {}", k + 2)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dmatrix;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn json_game_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("g.json");
        fs::write(&path, r#"{"player1": [[3, 2], [1, 4]], "player2": [[1, 4], [3, 2]]}"#).unwrap();
        let (a, b) = load_game(&path).unwrap();
        assert_eq!(a, dmatrix![3, 2; 1, 4]);
        assert_eq!(b, dmatrix![1, 4; 3, 2]);
    }

    #[test]
    fn json_rejects_non_integers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("g.json");
        fs::write(&path, r#"{"player1": [[1.5]], "player2": [[1]]}"#).unwrap();
        assert!(load_game(&path).is_err());
    }

    #[test]
    fn csv_game_loads_in_any_line_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("g.csv");
        fs::write(
            &path,
            "row,col,player1,player2\n1,1,4,2\n0,0,3,1\n0,1,2,4\n1,0,1,3\n",
        )
        .unwrap();
        let (a, b) = load_game(&path).unwrap();
        assert_eq!(a, dmatrix![3, 2; 1, 4]);
        assert_eq!(b, dmatrix![1, 4; 3, 2]);
    }

    #[test]
    fn csv_missing_and_duplicate_cells_fail() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("m.csv");
        fs::write(&missing, "row,col,player1,player2\n0,0,1,1\n1,1,2,2\n").unwrap();
        let err = load_game(&missing).unwrap_err();
        assert!(err.to_string().contains("missing"), "{err}");

        let dup = dir.path().join("d.csv");
        fs::write(&dup, "row,col,player1,player2\n0,0,1,1\n0,0,2,2\n").unwrap();
        let err = load_game(&dup).unwrap_err();
        assert!(err.to_string().contains("twice"), "{err}");
    }

    #[test]
    fn csv_sparse_huge_indices_fail_before_allocating() {
        let dir = tempdir().unwrap();
        let overflow = dir.path().join("o.csv");
        fs::write(
            &overflow,
            "row,col,player1,player2\n0,0,1,1\n9223372036854775806,3,2,2\n",
        )
        .unwrap();
        let err = load_game(&overflow).unwrap_err();
        assert!(err.to_string().contains("missing"), "{err}");

        let sparse = dir.path().join("s.csv");
        fs::write(&sparse, "row,col,player1,player2\n0,0,1,1\n99999,99999,2,2\n").unwrap();
        let err = load_game(&sparse).unwrap_err();
        assert!(err.to_string().contains("100000x100000"), "{err}");
    }

    #[test]
    fn game_file_round_trips_matrices() {
        let a = dmatrix![1, 2, 3; 4, 5, 6];
        let b = dmatrix![6, 5, 4; 3, 2, 1];
        let g = GameFile::from_matrices(&a, &b);
        assert_eq!(g.player1, vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(g.matrices().unwrap(), (a, b));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(load_game(Path::new("game.txt")).is_err());
    }
}

//! Payoff vectors from a bimatrix game.
//!
//! Player 1 chooses the row, Player 2 the column; cell `(i, j)` of the two
//! matrices gives the payoff pair for that outcome. `build` flattens the pair
//! of matrices into one `Point2` per cell, rows outer and columns inner, so
//! point `i * cols + j` always belongs to cell `(i, j)`.

use std::fmt;

use nalgebra::DMatrix;

use crate::geom::{Payoff, Point2};

/// Errors surfaced while assembling payoff vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The two matrices differ in row or column count.
    ShapeMismatch {
        player1: (usize, usize),
        player2: (usize, usize),
    },
    /// A matrix has no rows or no columns.
    EmptyMatrix { rows: usize, cols: usize },
    /// Nested rows of unequal length.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::ShapeMismatch { player1, player2 } => write!(
                f,
                "payoff matrices differ in shape: {}x{} vs {}x{}",
                player1.0, player1.1, player2.0, player2.1
            ),
            BuildError::EmptyMatrix { rows, cols } => {
                write!(f, "payoff matrix is empty ({rows}x{cols})")
            }
            BuildError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} entries, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// Flattened payoff vectors of one game, row-major.
///
/// Read-only after construction; duplicates are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point2>,
    rows: usize,
    cols: usize,
}

impl PointSet {
    #[inline]
    pub fn as_slice(&self) -> &[Point2] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn get(&self, i: usize) -> Option<Point2> {
        self.points.get(i).copied()
    }
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Point2> + '_ {
        self.points.iter().copied()
    }
    /// `(rows, cols)` of the source matrices.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
    /// Strategy pair `(row, col)` that produced point `i`.
    #[inline]
    pub fn cell_of(&self, i: usize) -> (usize, usize) {
        (i / self.cols, i % self.cols)
    }
}

/// Payoff vector per cell: `(a[i][j], b[i][j])`, rows outer, columns inner.
///
/// Shape is checked before emptiness, so a 0x0 vs 2x2 pair is a mismatch.
pub fn build(a: &DMatrix<Payoff>, b: &DMatrix<Payoff>) -> Result<PointSet, BuildError> {
    if a.shape() != b.shape() {
        return Err(BuildError::ShapeMismatch {
            player1: a.shape(),
            player2: b.shape(),
        });
    }
    let (rows, cols) = a.shape();
    if rows == 0 || cols == 0 {
        return Err(BuildError::EmptyMatrix { rows, cols });
    }
    let mut points = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            points.push(Point2::new(a[(i, j)], b[(i, j)]));
        }
    }
    Ok(PointSet { points, rows, cols })
}

/// Matrix from nested rows (the layout front-ends and JSON hand us).
pub fn matrix_from_rows(rows: &[Vec<Payoff>]) -> Result<DMatrix<Payoff>, BuildError> {
    let cols = rows.first().map_or(0, Vec::len);
    for (row, r) in rows.iter().enumerate() {
        if r.len() != cols {
            return Err(BuildError::RaggedRows {
                row,
                expected: cols,
                found: r.len(),
            });
        }
    }
    Ok(DMatrix::from_fn(rows.len(), cols, |i, j| rows[i][j]))
}

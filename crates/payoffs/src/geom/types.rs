//! Basic 2D types for payoff geometry.
//!
//! - `Payoff`: integer payoff entry as collected from the matrices.
//! - `Point2`: payoff vector `(u1, u2)`, x = Player 1, y = Player 2.
//! - `HullOrdering`: CCW vertex indices into a point slice (cyclic).

use nalgebra::Vector2;

/// Integer payoff value of a single matrix cell.
pub type Payoff = i32;

/// Payoff vector. Exact equality; coordinates never leave the integers.
pub type Point2 = Vector2<Payoff>;

/// Convex hull boundary as indices into the point slice it was computed from.
///
/// Invariants:
/// - Counter-clockwise order, first index is the start vertex (min x, then min y).
/// - Indices are unique and in bounds of the source slice.
/// - Cyclic: the closing edge last → first is implied, not stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HullOrdering {
    pub(crate) idx: Vec<usize>,
}

impl HullOrdering {
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.idx
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.idx.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }
    #[inline]
    pub fn into_vec(self) -> Vec<usize> {
        self.idx
    }

    /// Indices with the first one repeated at the end (closed polygon for renderers).
    pub fn closed(&self) -> impl Iterator<Item = usize> + '_ {
        self.idx.iter().copied().chain(self.idx.first().copied())
    }

    /// Resolve the hull vertices against the slice the ordering was computed from.
    ///
    /// Pre: `points` is that same slice (indices are not re-validated).
    pub fn vertices(&self, points: &[Point2]) -> Vec<Point2> {
        self.idx.iter().map(|&i| points[i]).collect()
    }

    /// Position of point index `i` along the boundary, if it is a hull vertex.
    #[inline]
    pub fn rank_of(&self, i: usize) -> Option<usize> {
        self.idx.iter().position(|&k| k == i)
    }
}

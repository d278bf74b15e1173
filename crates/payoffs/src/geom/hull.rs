//! Gift wrapping (Jarvis march) over integer payoff points.
//!
//! Conventions
//! - Output is a CCW index cycle starting at the lexicographically smallest
//!   point (min x, then min y, then lowest index). That start is always a
//!   strict vertex, which keeps the cross-product order below total.
//! - Collinear boundary points are dropped; only the farthest one along an
//!   edge is kept. Duplicates of a vertex never appear twice.
//! - The walk appends at most `n` vertices; running past that is reported as
//!   `HullError::DidNotConverge` instead of looping.

use std::fmt;

use super::types::{HullOrdering, Point2};
use super::util::{cross, dist2};

/// Errors surfaced by the hull walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// No points to wrap.
    Empty,
    /// The walk did not return to the start within `iterations` steps.
    DidNotConverge { iterations: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::Empty => write!(f, "convex hull of an empty point set"),
            HullError::DidNotConverge { iterations } => write!(
                f,
                "gift wrapping did not close after {iterations} steps (degenerate point set?)"
            ),
        }
    }
}

impl std::error::Error for HullError {}

/// Convex hull of `points` as a CCW index cycle.
///
/// - One point, or all points equal → single index.
/// - All points collinear → the two endpoints.
pub fn convex_hull(points: &[Point2]) -> Result<HullOrdering, HullError> {
    let n = points.len();
    if n == 0 {
        return Err(HullError::Empty);
    }
    let start = start_index(points);
    let mut idx = Vec::new();
    let mut cur = start;
    loop {
        idx.push(cur);
        let Some(next) = wrap_step(points, cur) else {
            // every point coincides with `cur`
            break;
        };
        if points[next] == points[start] {
            break;
        }
        if idx.len() >= n {
            return Err(HullError::DidNotConverge {
                iterations: idx.len(),
            });
        }
        cur = next;
    }
    Ok(HullOrdering { idx })
}

/// Lexicographic minimum by (x, y); first occurrence wins among equal points.
fn start_index(points: &[Point2]) -> usize {
    let mut best = 0usize;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if (p.x, p.y) < (b.x, b.y) {
            best = i;
        }
    }
    best
}

/// One Jarvis step: the point with every other point left of (or on) `cur → next`.
///
/// The candidate starts at the successor index and is replaced whenever a
/// scanned point lies strictly right of the current edge, or lies on it but
/// farther out. Returns `None` if no point differs from `points[cur]`.
fn wrap_step(points: &[Point2], cur: usize) -> Option<usize> {
    let n = points.len();
    let p = points[cur];
    let mut cand = (cur + 1) % n;
    for (j, &q) in points.iter().enumerate() {
        if j == cur || q == p {
            continue;
        }
        let c = points[cand];
        if c == p {
            cand = j;
            continue;
        }
        let turn = cross(p, c, q);
        if turn < 0 || (turn == 0 && dist2(p, q) > dist2(p, c)) {
            cand = j;
        }
    }
    (points[cand] != p).then_some(cand)
}

//! Core geometry bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_err, matrix_from_py, points_from_py, points_to_py};
use payoffs::api::{build, hull, pareto_optimal, sort_for_display, Payoff, Point2};
use pyo3::prelude::*;

/// Payoff vectors of two equal-shaped matrices, row-major.
#[pyfunction]
pub fn build_points(
    player1: Vec<Vec<Payoff>>,
    player2: Vec<Vec<Payoff>>,
) -> PyResult<Vec<(Payoff, Payoff)>> {
    let a = matrix_from_py(player1)?;
    let b = matrix_from_py(player2)?;
    let ps = build(&a, &b).map_err(map_err)?;
    Ok(points_to_py(ps.as_slice()))
}

/// CCW hull vertex indices; the polygon closes back to the first index.
#[pyfunction]
pub fn convex_hull(points: Vec<(Payoff, Payoff)>) -> PyResult<Vec<usize>> {
    let pts = points_from_py(points);
    hull(&pts).map(|h| h.into_vec()).map_err(map_err)
}

/// Distinct Pareto-optimal points; `display=True` sorts by Player 2 payoff descending.
#[pyfunction]
#[pyo3(signature = (points, display = false))]
pub fn pareto_front(points: Vec<(Payoff, Payoff)>, display: bool) -> Vec<(Payoff, Payoff)> {
    let pts = points_from_py(points);
    let mut front = pareto_optimal(&pts);
    if display {
        sort_for_display(&mut front);
    }
    points_to_py(&front)
}

/// Signed area of the parallelogram spanned by two payoff vectors.
#[pyfunction]
pub fn parallelogram_area(a: (Payoff, Payoff), b: (Payoff, Payoff)) -> i128 {
    payoffs::parallelogram_area(Point2::new(a.0, a.1), Point2::new(b.0, b.1))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_points, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(pareto_front, m)?)?;
    m.add_function(wrap_pyfunction!(parallelogram_area, m)?)?;
    Ok(())
}

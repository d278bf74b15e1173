use nalgebra::{DMatrix, Vector2};
use payoffs::api::{matrix_from_rows, Payoff, Point2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn matrix_from_py(rows: Vec<Vec<Payoff>>) -> PyResult<DMatrix<Payoff>> {
    matrix_from_rows(&rows).map_err(map_err)
}

pub fn points_from_py(points: Vec<(Payoff, Payoff)>) -> Vec<Point2> {
    points.into_iter().map(|(x, y)| Vector2::new(x, y)).collect()
}

pub fn points_to_py(points: &[Point2]) -> Vec<(Payoff, Payoff)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}

pub fn map_err<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}

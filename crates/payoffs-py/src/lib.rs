//! PyO3 bindings for the `payoffs` core.
//!
//! Notes
//! - Keep bindings thin and predictable: matrices are nested lists of ints,
//!   points are `(x, y)` tuples, hulls are index lists.
//! - Everything is computed in Rust; a Python front-end only collects input
//!   and renders the returned values.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn payoffs_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)?;
    Ok(())
}

//! Payoff-plane geometry (integer, exact).
//!
//! Purpose
//! - Convex hull of the feasible payoff vectors (gift wrapping, CCW indices).
//! - Pareto-optimal payoff vectors (pairwise dominance).
//!
//! Both operations borrow a point slice and return fresh values; nothing is
//! cached between calls. Arithmetic is exact: `i32` payoffs, `i128` cross
//! products.
//!
//! Code cross-refs: `hull::convex_hull`, `pareto::pareto_optimal`, `crate::payoff::build`

mod hull;
mod pareto;
mod types;
mod util;

pub use hull::{convex_hull, HullError};
pub use pareto::{pareto_indices, pareto_optimal, sort_for_display};
pub use types::{HullOrdering, Payoff, Point2};
pub use util::dominates;

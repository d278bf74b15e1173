//! Curated surface for front-ends (the three core operations plus the pipeline).
//!
//! Prefer these re-exports in bindings and the CLI so they stay in step.

pub use crate::analysis::{analyze, Analysis, AnalysisCfg, AnalysisError, ParetoOrder};
pub use crate::geom::{
    convex_hull as hull, dominates, pareto_indices, pareto_optimal, sort_for_display, HullError,
    HullOrdering, Payoff, Point2,
};
pub use crate::payoff::{build, matrix_from_rows, BuildError, PointSet};

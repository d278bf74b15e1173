//! Feasible payoff geometry for two-player bimatrix games.
//!
//! Pipeline: two payoff matrices → payoff vectors (`payoff`) → convex hull and
//! Pareto front (`geom`). `analysis` chains the steps for front-ends; `random`
//! draws reproducible games for benches and fuzzing.
//!
//! All operations are pure: inputs are borrowed, outputs are fresh values,
//! nothing is shared between calls.

pub mod analysis;
pub mod api;
pub mod geom;
pub mod payoff;
pub mod random;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{DMatrix, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{analyze, Analysis, AnalysisCfg, AnalysisError, ParetoOrder};
    pub use crate::geom::{
        convex_hull, pareto_optimal, HullError, HullOrdering, Payoff, Point2,
    };
    pub use crate::payoff::{build, matrix_from_rows, BuildError, PointSet};
    pub use crate::random::{draw_game, GameCfg, ReplayToken, StrategyCount};
    pub use nalgebra::DMatrix;
}

/// Signed area of the parallelogram spanned by payoff vectors `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise. Exact.
#[inline]
pub fn parallelogram_area(a: geom::Point2, b: geom::Point2) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}

//! One-shot analysis of a bimatrix game: payoff vectors, hull, Pareto front.
//!
//! This is the "calculate" step a front-end runs after collecting the two
//! matrices. It returns plain values for rendering; the polygon is closed by
//! the caller via `HullOrdering::closed` or `Analysis::hull_polygon`.

use std::fmt;

use nalgebra::DMatrix;

use crate::geom::{
    convex_hull, pareto_indices, pareto_optimal, sort_for_display, HullError, HullOrdering,
    Payoff, Point2,
};
use crate::payoff::{build, BuildError, PointSet};

/// Order of `Analysis::pareto`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParetoOrder {
    /// First occurrence in the point set.
    #[default]
    Input,
    /// Player 2 payoff descending, Player 1 ascending (plot order).
    Display,
}

/// Analysis configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalysisCfg {
    pub pareto_order: ParetoOrder,
}

/// Either stage of the pipeline can fail; nothing partial is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    Build(BuildError),
    Hull(HullError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Build(e) => write!(f, "building payoff vectors: {e}"),
            AnalysisError::Hull(e) => write!(f, "computing convex hull: {e}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Build(e) => Some(e),
            AnalysisError::Hull(e) => Some(e),
        }
    }
}

impl From<BuildError> for AnalysisError {
    fn from(e: BuildError) -> Self {
        AnalysisError::Build(e)
    }
}

impl From<HullError> for AnalysisError {
    fn from(e: HullError) -> Self {
        AnalysisError::Hull(e)
    }
}

/// Result bundle handed to a renderer.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub points: PointSet,
    pub hull: HullOrdering,
    /// Distinct undominated payoff vectors, ordered per `AnalysisCfg`.
    pub pareto: Vec<Point2>,
    /// Every position holding an undominated vector (duplicates included).
    pub pareto_idx: Vec<usize>,
}

impl Analysis {
    /// Hull vertices in CCW order (open polygon).
    pub fn hull_points(&self) -> Vec<Point2> {
        self.hull.vertices(self.points.as_slice())
    }

    /// Hull vertices with the first vertex repeated at the end.
    pub fn hull_polygon(&self) -> Vec<Point2> {
        let pts = self.points.as_slice();
        self.hull.closed().map(|i| pts[i]).collect()
    }

    /// Twice the signed area of the hull polygon (shoelace); 0 for degenerate hulls.
    pub fn hull_area2(&self) -> i128 {
        let h = self.hull_points();
        (0..h.len())
            .map(|k| crate::parallelogram_area(h[k], h[(k + 1) % h.len()]))
            .sum()
    }

    #[inline]
    pub fn is_pareto(&self, i: usize) -> bool {
        self.pareto_idx.binary_search(&i).is_ok()
    }
}

/// Build the payoff vectors of `(a, b)` and run both geometry passes.
pub fn analyze(
    a: &DMatrix<Payoff>,
    b: &DMatrix<Payoff>,
    cfg: &AnalysisCfg,
) -> Result<Analysis, AnalysisError> {
    let points = build(a, b)?;
    let hull = convex_hull(points.as_slice())?;
    let mut pareto = pareto_optimal(points.as_slice());
    if cfg.pareto_order == ParetoOrder::Display {
        sort_for_display(&mut pareto);
    }
    let pareto_idx = pareto_indices(points.as_slice());
    Ok(Analysis {
        points,
        hull,
        pareto,
        pareto_idx,
    })
}

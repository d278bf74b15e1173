//! Pareto-optimal payoff vectors by pairwise dominance.
//!
//! O(n²) comparisons; strategy counts are small, and the quadratic loop keeps
//! position-based semantics (duplicates never dominate each other).

use super::types::Point2;
use super::util::dominates;

/// Positions whose point is not dominated by any other position.
///
/// Equal points keep each other alive, so duplicated optima all appear here.
pub fn pareto_indices(points: &[Point2]) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|&(i, &p)| {
            !points
                .iter()
                .enumerate()
                .any(|(j, &q)| j != i && dominates(q, p))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Distinct undominated payoff vectors, in first-occurrence order.
pub fn pareto_optimal(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::new();
    for i in pareto_indices(points) {
        let p = points[i];
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

/// Presentation order for a Pareto front: Player 2 payoff descending, then
/// Player 1 ascending. Walks the front from its top-left end.
pub fn sort_for_display(points: &mut [Point2]) {
    points.sort_by(|a, b| b.y.cmp(&a.y).then(a.x.cmp(&b.x)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn staircase_front() {
        let pts = [
            vector![1, 5],
            vector![2, 2],
            vector![3, 3],
            vector![5, 1],
            vector![0, 0],
        ];
        assert_eq!(pareto_indices(&pts), vec![0, 2, 3]);
    }

    #[test]
    fn duplicates_survive_in_indices_but_not_values() {
        let pts = [vector![4, 4], vector![1, 1], vector![4, 4]];
        assert_eq!(pareto_indices(&pts), vec![0, 2]);
        assert_eq!(pareto_optimal(&pts), vec![vector![4, 4]]);
    }

    #[test]
    fn display_order_is_y_descending() {
        let mut front = vec![vector![5, 1], vector![1, 5], vector![3, 3]];
        sort_for_display(&mut front);
        assert_eq!(front, vec![vector![1, 5], vector![3, 3], vector![5, 1]]);
    }

    #[test]
    fn empty_set_has_empty_front() {
        assert!(pareto_optimal(&[]).is_empty());
    }
}

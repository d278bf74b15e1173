use super::types::Point2;

/// Widened difference `b - a`; payoffs are `i32`, so `i128` never overflows below.
#[inline]
fn delta(a: Point2, b: Point2) -> (i128, i128) {
    (
        i128::from(b.x) - i128::from(a.x),
        i128::from(b.y) - i128::from(a.y),
    )
}

/// Signed cross product of `a - o` and `b - o`.
///
/// Positive when `o → a → b` turns counter-clockwise (b left of o→a),
/// negative for clockwise, zero when collinear.
#[inline]
pub(crate) fn cross(o: Point2, a: Point2, b: Point2) -> i128 {
    let (ax, ay) = delta(o, a);
    let (bx, by) = delta(o, b);
    ax * by - ay * bx
}

/// Squared Euclidean distance, exact.
#[inline]
pub(crate) fn dist2(a: Point2, b: Point2) -> i128 {
    let (dx, dy) = delta(a, b);
    dx * dx + dy * dy
}

/// `q` dominates `p`: weakly better for both players, strictly better for one.
#[inline]
pub fn dominates(q: Point2, p: Point2) -> bool {
    q.x >= p.x && q.y >= p.y && (q.x > p.x || q.y > p.y)
}

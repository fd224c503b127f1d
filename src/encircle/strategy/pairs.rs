use crate::encircle::strategy::Strategy;
use crate::encircle::{self, Circle};

/// Exhaustive search over every unordered pair of points, each taken as the
/// diameter of a candidate circle.
///
/// C(n,2) candidates with an O(n) containment check each, so O(n³) overall.
/// Ties on radius keep the first candidate encountered in pair-index order.
pub struct PairDiameters;

impl<P: encircle::Point> Strategy<P> for PairDiameters {
    fn smallest_circle(&self, points: &[P]) -> Circle<P> {
        let mut best = Circle::unbounded();
        let mut evaluated = 0usize;

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                evaluated += 1;
                let candidate = Circle::from_diameter(&points[i], &points[j]);
                if candidate.radius < best.radius && candidate.contains_all(points) {
                    best = candidate;
                }
            }
        }

        tracing::debug!(points = points.len(), evaluated, "pair-diameter search done");
        best
    }
}

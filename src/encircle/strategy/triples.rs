use crate::encircle::strategy::Strategy;
use crate::encircle::{self, Circle};

/// Exhaustive search over every unordered triple of points, each taken as
/// the generators of a candidate circumcircle.
///
/// C(n,3) candidates with an O(n) containment check each, so O(n⁴) overall.
/// Collinear triples produce no circumcircle and are skipped. Ties on radius
/// keep the first candidate encountered in triple-index order.
pub struct TripleCircumcircles;

impl<P: encircle::Point> Strategy<P> for TripleCircumcircles {
    fn smallest_circle(&self, points: &[P]) -> Circle<P> {
        let mut best = Circle::unbounded();
        let mut evaluated = 0usize;
        let mut collinear = 0usize;

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                for k in (j + 1)..points.len() {
                    evaluated += 1;
                    let Some(candidate) =
                        Circle::circumscribing(&points[i], &points[j], &points[k])
                    else {
                        collinear += 1;
                        continue;
                    };
                    if candidate.radius < best.radius && candidate.contains_all(points) {
                        best = candidate;
                    }
                }
            }
        }

        tracing::debug!(
            points = points.len(),
            evaluated,
            collinear,
            "triple-circumcircle search done"
        );
        best
    }
}

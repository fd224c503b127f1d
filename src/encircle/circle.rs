use crate::encircle::Point;

/// Slack added to squared-distance comparisons when testing containment.
///
/// Applied to the squared distance, not the radius, so its effective linear
/// magnitude shrinks as the radius grows.
pub const CONTAINMENT_TOLERANCE: f64 = 1e-6;

/// A circle as a plain value: center point and radius.
///
/// A radius of `f64::INFINITY` is the "no circle found yet" sentinel used by
/// the search strategies; every real circle has a finite, non-negative
/// radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle<P: Point> {
    pub center: P,
    pub radius: f64,
}

impl<P: Point> Circle<P> {
    pub fn new(center: P, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The sentinel circle: centered at the origin with infinite radius
    pub fn unbounded() -> Self {
        Self {
            center: P::from_xy(0.0, 0.0),
            radius: f64::INFINITY,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.radius.is_infinite()
    }

    /// The circle with segment `p1`-`p2` as a diameter: the smallest circle
    /// with both points on its boundary.
    ///
    /// Identical points give the degenerate radius-0 circle, which is still
    /// a valid result.
    pub fn from_diameter(p1: &P, p2: &P) -> Self {
        let center = P::from_xy(
            (p1.x() + p2.x()) / 2.0,
            (p1.y() + p2.y()) / 2.0,
        );
        let radius = p1.distance(p2) / 2.0;
        Self { center, radius }
    }

    /// The circumcircle of three points, or `None` if they are collinear.
    ///
    /// Standard determinant closed form. Collinearity is detected by exact
    /// equality `A == 0.0`; nearly-collinear triples therefore pass the
    /// check and can yield enormous radii. Callers treat `None` as an
    /// expected outcome and skip the triple.
    pub fn circumscribing(p1: &P, p2: &P, p3: &P) -> Option<Self> {
        let (x1, y1) = (p1.x(), p1.y());
        let (x2, y2) = (p2.x(), p2.y());
        let (x3, y3) = (p3.x(), p3.y());

        let s1 = x1 * x1 + y1 * y1;
        let s2 = x2 * x2 + y2 * y2;
        let s3 = x3 * x3 + y3 * y3;

        let a = x1 * (y2 - y3) - y1 * (x2 - x3) + x2 * y3 - x3 * y2;
        if a == 0.0 {
            return None;
        }

        let b = s1 * (y3 - y2) + s2 * (y1 - y3) + s3 * (y2 - y1);
        let c = s1 * (x2 - x3) + s2 * (x3 - x1) + s3 * (x1 - x2);
        let d = s1 * (x3 * y2 - x2 * y3) + s2 * (x1 * y3 - x3 * y1) + s3 * (x2 * y1 - x1 * y2);

        let center = P::from_xy(-b / (2.0 * a), -c / (2.0 * a));
        // rounding can push the operand just below zero for tiny triangles
        let radius = ((b * b + c * c - 4.0 * a * d) / (4.0 * a * a)).max(0.0).sqrt();

        Some(Self { center, radius })
    }

    /// Whether `p` lies inside or on this circle, within tolerance
    pub fn contains(&self, p: &P) -> bool {
        p.distance_squared(&self.center) <= self.radius * self.radius + CONTAINMENT_TOLERANCE
    }

    /// Whether every point of `points` lies inside or on this circle.
    ///
    /// Short-circuits on the first point outside the bound.
    pub fn contains_all(&self, points: &[P]) -> bool {
        points.iter().all(|p| self.contains(p))
    }
}

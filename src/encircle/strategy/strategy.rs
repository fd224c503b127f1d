use crate::encircle::{self, Circle};

/// A type that represents one way of searching for the smallest circle
/// enclosing a point collection
pub trait Strategy<P: encircle::Point> {
    /// Find the smallest enclosing circle this strategy can produce for
    /// `points`.
    ///
    /// Returns [`Circle::unbounded`] when the collection is too small to
    /// yield any candidate; callers must check [`Circle::is_unbounded`]
    /// before treating the result as an answer. Pure: the same slice always
    /// yields the same circle, and no state survives between calls.
    fn smallest_circle(&self, points: &[P]) -> Circle<P>;
}

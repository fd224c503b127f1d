pub trait Point: PartialEq + Clone {
    fn x(&self) -> f64;

    fn y(&self) -> f64;

    /// Build a point from its coordinates
    fn from_xy(x: f64, y: f64) -> Self;

    fn distance_squared(&self, other: &Self) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }

    fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

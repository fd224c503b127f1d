//! Concrete 2D binding of the enclosing-circle types to glam vectors
//!
//! Double precision throughout: the containment tolerance of 1e-6 on
//! squared distances is below f32 resolution for any realistic coordinate
//! scale.

use crate::encircle::{Circle, Point};
use glam::DVec2;

impl Point for DVec2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn from_xy(x: f64, y: f64) -> Self {
        DVec2::new(x, y)
    }

    fn distance_squared(&self, other: &Self) -> f64 {
        (self - other).length_squared()
    }

    fn distance(&self, other: &Self) -> f64 {
        (self - other).length()
    }
}

pub type Circle2D = Circle<DVec2>;

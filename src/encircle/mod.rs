mod circle;
mod point;
pub mod strategy;

pub use circle::{Circle, CONTAINMENT_TOLERANCE};
pub use point::Point;

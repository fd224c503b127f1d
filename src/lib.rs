//! Brute-force smallest enclosing circle.
//!
//! Two exhaustive reference algorithms for the smallest circle containing a
//! set of 2D points: one over all point pairs taken as diameters, one over
//! all point triples taken as circumcircle generators. Deliberately O(n³)
//! and O(n⁴): a correctness-first benchmark baseline, not a Welzl-style
//! production solver.

mod encircle;

#[cfg(feature = "2d")]
pub mod dataset;
#[cfg(feature = "2d")]
pub mod encircle2d;

pub use encircle::*;

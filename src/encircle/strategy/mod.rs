mod pairs;
mod strategy;
mod triples;

pub use pairs::PairDiameters;
pub use strategy::Strategy;
pub use triples::TripleCircumcircles;

//! Loading point collections from text files.
//!
//! Format: first line is an integer point count `n`, each of the next `n`
//! lines holds two whitespace-separated coordinates. Anything after the
//! `n`-th point line is ignored. All structural validation lives here; the
//! search strategies only ever see well-formed in-memory slices.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::DVec2;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing point-count header")]
    MissingCount,

    #[error("invalid point count {0:?}")]
    InvalidCount(String),

    #[error("line {line}: malformed point {text:?}")]
    MalformedPoint { line: usize, text: String },

    #[error("expected {expected} points but the file ends after {found}")]
    Truncated { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, DatasetError>;

/// Read a point file into an ordered collection.
///
/// The order of the returned points is the file order; it determines which
/// circle wins when several minimal candidates tie on radius.
pub fn read_points(path: &Path) -> Result<Vec<DVec2>> {
    let mut lines = BufReader::new(File::open(path)?).lines();

    let header = lines.next().ok_or(DatasetError::MissingCount)??;
    let count: usize = header
        .trim()
        .parse()
        .map_err(|_| DatasetError::InvalidCount(header.trim().to_string()))?;

    let mut points = Vec::with_capacity(count);
    for found in 0..count {
        let line = lines.next().ok_or(DatasetError::Truncated {
            expected: count,
            found,
        })??;

        // line numbers in errors are 1-based and include the header line
        let malformed = || DatasetError::MalformedPoint {
            line: found + 2,
            text: line.trim().to_string(),
        };

        let mut parts = line.split_whitespace();
        let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let x: f64 = x.parse().map_err(|_| malformed())?;
        let y: f64 = y.parse().map_err(|_| malformed())?;
        points.push(DVec2::new(x, y));
    }

    tracing::debug!(path = %path.display(), points = points.len(), "dataset loaded");
    Ok(points)
}

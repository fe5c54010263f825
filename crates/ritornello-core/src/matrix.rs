//! Precomputed pairwise similarity scores.
//!
//! The matrix is built by an offline process and loaded read-only at
//! startup. Cell (i, j) holds the similarity of track i to track j in
//! the catalog's position space. Symmetry is assumed from construction
//! and not enforced at runtime.

use serde::Deserialize;

use crate::error::{Error, Result};

/// An immutable N x N table of similarity scores, stored row-major in
/// a single flat buffer.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>")]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build a matrix from nested rows, validating squareness.
    ///
    /// Every row must have exactly as many columns as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = rows.len();
        let mut scores = Vec::with_capacity(dim * dim);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(Error::InvalidData(format!(
                    "similarity matrix is not square: row {i} has {} columns, expected {dim}",
                    row.len()
                )));
            }
            scores.extend(row);
        }
        Ok(Self { dim, scores })
    }

    /// Number of rows (== number of columns).
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// All scores for the track at `position`, one per catalog entry.
    ///
    /// Returns `None` when `position` is out of range.
    #[must_use]
    pub fn row(&self, position: usize) -> Option<&[f64]> {
        if position >= self.dim {
            return None;
        }
        let start = position * self.dim;
        Some(&self.scores[start..start + self.dim])
    }
}

impl TryFrom<Vec<Vec<f64>>> for SimilarityMatrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

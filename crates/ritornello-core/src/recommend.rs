//! Nearest-neighbor ranking over the similarity matrix.

use crate::catalog::{Catalog, Track};
use crate::error::{Error, Result};
use crate::matrix::SimilarityMatrix;

/// A ranked neighbor: a catalog track with its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTrack {
    /// Position of the track in the catalog.
    pub position: usize,
    /// Similarity of this track to the query track.
    pub score: f64,
    pub track: Track,
}

/// Ranks catalog tracks by similarity to a query track.
///
/// Holds the immutable catalog and matrix; both are injected at
/// construction so small synthetic instances can be tested in
/// isolation. Construction fails when the matrix dimension does not
/// match the catalog length, which is the one fatal startup-time
/// consistency check in the system.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Catalog,
    matrix: SimilarityMatrix,
}

impl Recommender {
    /// Pair a catalog with its similarity matrix.
    pub fn new(catalog: Catalog, matrix: SimilarityMatrix) -> Result<Self> {
        if matrix.dim() != catalog.len() {
            return Err(Error::DimensionMismatch {
                tracks: catalog.len(),
                rows: matrix.dim(),
                cols: matrix.dim(),
            });
        }
        Ok(Self { catalog, matrix })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The top `k` tracks most similar to the track titled `title`.
    ///
    /// The query track is excluded from the candidate pool by position
    /// before ranking, so it can never appear in its own results even
    /// when its self-similarity is not the row maximum. Candidates are
    /// sorted by descending score; exact ties rank the lower catalog
    /// position first, keeping results deterministic for matrices with
    /// repeated scores.
    ///
    /// Returns exactly `k` tracks when the catalog holds more than `k`
    /// other tracks, otherwise all of them. An unknown title fails
    /// with [`Error::NotFound`].
    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<ScoredTrack>> {
        let query = self.catalog.position(title)?;
        let row = self
            .matrix
            .row(query)
            .ok_or_else(|| Error::InvalidData(format!("matrix row {query} missing")))?;

        let mut candidates: Vec<(usize, f64)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(position, _)| position != query)
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        candidates.truncate(k);

        candidates
            .into_iter()
            .map(|(position, score)| {
                let track = self
                    .catalog
                    .get(position)
                    .ok_or_else(|| {
                        Error::InvalidData(format!("catalog position {position} missing"))
                    })?
                    .clone();
                Ok(ScoredTrack {
                    position,
                    score,
                    track,
                })
            })
            .collect()
    }
}

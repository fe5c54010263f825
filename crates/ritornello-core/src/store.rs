//! Startup-time loading of the persisted catalog and matrix.
//!
//! Both inputs are JSON blobs produced by an offline build step:
//! `catalog.json` is an ordered array of `{"title", "artist"}` objects
//! and `similarity.json` an array of N rows of N numbers. Loading is
//! the only file I/O in the system; everything after it is in-memory
//! and read-only.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::catalog::{Catalog, Track};
use crate::error::Result;
use crate::matrix::SimilarityMatrix;
use crate::recommend::Recommender;

/// Load the track catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path)?;
    let tracks: Vec<Track> = serde_json::from_reader(BufReader::new(file))?;
    log::info!("loaded {} tracks from {}", tracks.len(), path.display());
    Ok(Catalog::new(tracks))
}

/// Load the similarity matrix from a JSON file.
///
/// Squareness is validated during deserialization.
pub fn load_matrix(path: &Path) -> Result<SimilarityMatrix> {
    let file = File::open(path)?;
    let matrix: SimilarityMatrix = serde_json::from_reader(BufReader::new(file))?;
    log::info!(
        "loaded {0}x{0} similarity matrix from {1}",
        matrix.dim(),
        path.display()
    );
    Ok(matrix)
}

/// Load both blobs and pair them into a [`Recommender`].
///
/// Fails when either file is missing or malformed, or when the matrix
/// dimension does not match the catalog length.
pub fn load_recommender(catalog_path: &Path, matrix_path: &Path) -> Result<Recommender> {
    let catalog = load_catalog(catalog_path)?;
    let matrix = load_matrix(matrix_path)?;
    Recommender::new(catalog, matrix)
}

//! Integration tests for the load -> rank -> enrich pipeline.
//!
//! These tests run the whole flow from on-disk JSON blobs to complete
//! recommendations using a stub enricher, so no network access or real
//! Spotify credentials are required.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use ritornello_core::{store, Error, Recommender};
use ritornello_enrich::{
    recommend_enriched, Enricher, PlaceholderEnricher, TrackMetadata, DEFAULT_COVER_URL,
};

const CATALOG_JSON: &str = r#"[
    {"title": "Aurora", "artist": "Nightjar"},
    {"title": "Breakwater", "artist": "Selkie"},
    {"title": "Cinders", "artist": "Hollow Pines"},
    {"title": "Driftline", "artist": "Marrowbone"}
]"#;

const SIMILARITY_JSON: &str = r#"[
    [1.0, 0.9, 0.9, 0.1],
    [0.9, 1.0, 0.2, 0.3],
    [0.9, 0.2, 1.0, 0.4],
    [0.1, 0.3, 0.4, 1.0]
]"#;

fn write_fixtures(dir: &TempDir) -> (PathBuf, PathBuf) {
    let catalog = dir.path().join("catalog.json");
    let similarity = dir.path().join("similarity.json");
    fs::write(&catalog, CATALOG_JSON).unwrap();
    fs::write(&similarity, SIMILARITY_JSON).unwrap();
    (catalog, similarity)
}

fn load(dir: &TempDir) -> Recommender {
    let (catalog, similarity) = write_fixtures(dir);
    store::load_recommender(&catalog, &similarity).unwrap()
}

/// Answers only for one artist's tracks.
struct OneArtistEnricher;

#[async_trait::async_trait]
impl Enricher for OneArtistEnricher {
    async fn fetch_metadata(&self, title: &str, artist: &str) -> TrackMetadata {
        if artist == "Selkie" {
            TrackMetadata {
                cover_url: format!("https://img.example/{title}.jpg"),
                preview_url: None,
                external_url: Some("https://open.spotify.com/track/selkie".to_string()),
            }
        } else {
            TrackMetadata::placeholder()
        }
    }
}

#[tokio::test]
async fn full_pipeline_ranks_ties_by_position() {
    let dir = TempDir::new().unwrap();
    let recommender = load(&dir);

    let results = recommend_enriched(&recommender, &PlaceholderEnricher, "Aurora", 2)
        .await
        .unwrap();

    let titles: Vec<&str> = results.iter().map(|r| r.track.title.as_str()).collect();
    // Breakwater and Cinders tie at 0.9; the lower position ranks first.
    assert_eq!(titles, vec!["Breakwater", "Cinders"]);
}

#[tokio::test]
async fn full_pipeline_returns_complete_cards_on_partial_enrichment() {
    let dir = TempDir::new().unwrap();
    let recommender = load(&dir);

    let results = recommend_enriched(&recommender, &OneArtistEnricher, "Aurora", 3)
        .await
        .unwrap();
    assert_eq!(results.len(), 3);

    let breakwater = &results[0];
    assert_eq!(breakwater.track.artist, "Selkie");
    assert_eq!(breakwater.metadata.cover_url, "https://img.example/Breakwater.jpg");
    assert!(breakwater.metadata.preview_url.is_none());

    for degraded in &results[1..] {
        assert_eq!(degraded.metadata.cover_url, DEFAULT_COVER_URL);
        assert!(degraded.metadata.external_url.is_none());
    }
}

#[tokio::test]
async fn unknown_title_propagates_not_found() {
    let dir = TempDir::new().unwrap();
    let recommender = load(&dir);

    let err = recommend_enriched(&recommender, &PlaceholderEnricher, "Undertow", 5)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn mismatched_blobs_fail_at_load() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    let similarity = dir.path().join("similarity.json");
    fs::write(&catalog, CATALOG_JSON).unwrap();
    fs::write(&similarity, "[[1.0, 0.5], [0.5, 1.0]]").unwrap();

    let err = store::load_recommender(&catalog, &similarity).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch { tracks: 4, rows: 2, .. }
    ));
}

#[test]
fn missing_blob_fails_at_load() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("absent.json");
    let similarity = dir.path().join("also-absent.json");
    let err = store::load_recommender(&catalog, &similarity).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

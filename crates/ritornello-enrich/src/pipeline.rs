//! The resolve, rank, enrich pipeline.

use ritornello_core::{Recommender, Result, ScoredTrack, Track};

use crate::metadata::{Enricher, TrackMetadata};

/// One render-ready recommendation.
///
/// Request-scoped and always complete: the metadata field is the
/// placeholder when enrichment missed, never absent.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub track: Track,
    /// Similarity of this track to the query track.
    pub score: f64,
    pub metadata: TrackMetadata,
}

/// Rank the top `k` neighbors of `title` and enrich each with display
/// metadata.
///
/// A title missing from the catalog propagates as
/// [`ritornello_core::Error::NotFound`] with no partial result.
/// Enrichment failures do not propagate at all; every returned entry
/// carries complete metadata. Lookups run sequentially through the
/// enricher's own rate limiting.
pub async fn recommend_enriched(
    recommender: &Recommender,
    enricher: &dyn Enricher,
    title: &str,
    k: usize,
) -> Result<Vec<Recommendation>> {
    let ranked = recommender.recommend(title, k)?;
    log::info!("ranked {} neighbors for {title:?}", ranked.len());

    let mut recommendations = Vec::with_capacity(ranked.len());
    for ScoredTrack { track, score, .. } in ranked {
        let metadata = enricher.fetch_metadata(&track.title, &track.artist).await;
        recommendations.push(Recommendation {
            track,
            score,
            metadata,
        });
    }
    Ok(recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{PlaceholderEnricher, DEFAULT_COVER_URL};
    use ritornello_core::{Catalog, Error, SimilarityMatrix};

    /// Resolves a fixed set of titles; misses everything else.
    struct FakeEnricher {
        known: Vec<&'static str>,
    }

    #[async_trait::async_trait]
    impl Enricher for FakeEnricher {
        async fn fetch_metadata(&self, title: &str, _artist: &str) -> TrackMetadata {
            if self.known.contains(&title) {
                TrackMetadata {
                    cover_url: format!("https://img.example/{title}.jpg"),
                    preview_url: Some(format!("https://p.example/{title}.mp3")),
                    external_url: Some(format!("https://open.spotify.com/track/{title}")),
                }
            } else {
                TrackMetadata::placeholder()
            }
        }
    }

    fn recommender() -> Recommender {
        let catalog = Catalog::new(vec![
            Track::new("A", "artist1"),
            Track::new("B", "artist2"),
            Track::new("C", "artist3"),
            Track::new("D", "artist4"),
        ]);
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.9, 0.9, 0.1],
            vec![0.9, 1.0, 0.2, 0.3],
            vec![0.9, 0.2, 1.0, 0.4],
            vec![0.1, 0.3, 0.4, 1.0],
        ])
        .unwrap();
        Recommender::new(catalog, matrix).unwrap()
    }

    #[tokio::test]
    async fn test_tied_neighbors_rank_by_position() {
        let r = recommender();
        let results = recommend_enriched(&r, &PlaceholderEnricher, "A", 2)
            .await
            .unwrap();
        let titles: Vec<&str> = results.iter().map(|r| r.track.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_unknown_title_fails_with_no_partial_result() {
        let r = recommender();
        let err = recommend_enriched(&r, &PlaceholderEnricher, "Unknown Song", 5)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { title } if title == "Unknown Song"));
    }

    #[tokio::test]
    async fn test_every_recommendation_is_complete() {
        let r = recommender();
        // Only "B" resolves; "C" and "D" must still come back, degraded.
        let enricher = FakeEnricher { known: vec!["B"] };
        let results = recommend_enriched(&r, &enricher, "A", 3).await.unwrap();
        assert_eq!(results.len(), 3);

        assert_eq!(results[0].track.title, "B");
        assert_eq!(results[0].metadata.cover_url, "https://img.example/B.jpg");
        assert!(results[0].metadata.preview_url.is_some());

        for miss in &results[1..] {
            assert_eq!(miss.metadata.cover_url, DEFAULT_COVER_URL);
            assert!(miss.metadata.preview_url.is_none());
            assert!(miss.metadata.external_url.is_none());
        }
    }

    #[tokio::test]
    async fn test_scores_survive_enrichment() {
        let r = recommender();
        let results = recommend_enriched(&r, &PlaceholderEnricher, "D", 3)
            .await
            .unwrap();
        assert_eq!(results[0].track.title, "C");
        assert_eq!(results[0].score, 0.4);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}

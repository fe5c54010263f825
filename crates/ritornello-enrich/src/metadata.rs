//! The metadata contract and its fallback policy.

use serde::{Deserialize, Serialize};

/// Cover image used whenever the external catalog has no match.
pub const DEFAULT_COVER_URL: &str = "https://i.postimg.cc/0QNxYz4V/social.png";

/// Display metadata for one track.
///
/// Always complete from the consumer's point of view: a failed or
/// empty remote lookup yields the placeholder form rather than an
/// error or a partially-filled value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Cover art URL. Never empty; the placeholder when unresolved.
    pub cover_url: String,
    /// Short audio preview URL. Absent for many tracks even on a hit.
    pub preview_url: Option<String>,
    /// Link to the track on the external catalog.
    pub external_url: Option<String>,
}

impl TrackMetadata {
    /// The degraded-success form used when a lookup misses or fails.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            cover_url: DEFAULT_COVER_URL.to_string(),
            preview_url: None,
            external_url: None,
        }
    }

    /// Whether this is the placeholder form.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.cover_url == DEFAULT_COVER_URL
            && self.preview_url.is_none()
            && self.external_url.is_none()
    }
}

/// Looks up display metadata for a (title, artist) pair.
///
/// Infallible by contract: implementations must degrade misses,
/// timeouts, and remote errors to [`TrackMetadata::placeholder`]
/// instead of returning an error, so callers always receive a
/// complete value per track. The trait is the seam that keeps
/// recommender tests off the network.
#[async_trait::async_trait]
pub trait Enricher: Send + Sync {
    async fn fetch_metadata(&self, title: &str, artist: &str) -> TrackMetadata;
}

/// An enricher that never looks anything up.
///
/// Used when no catalog credentials are configured, and as a test
/// stand-in.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderEnricher;

#[async_trait::async_trait]
impl Enricher for PlaceholderEnricher {
    async fn fetch_metadata(&self, _title: &str, _artist: &str) -> TrackMetadata {
        TrackMetadata::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_default_cover_and_no_links() {
        let meta = TrackMetadata::placeholder();
        assert_eq!(meta.cover_url, DEFAULT_COVER_URL);
        assert!(!meta.cover_url.is_empty());
        assert!(meta.preview_url.is_none());
        assert!(meta.external_url.is_none());
        assert!(meta.is_placeholder());
    }

    #[test]
    fn test_resolved_metadata_is_not_placeholder() {
        let meta = TrackMetadata {
            cover_url: "https://img.example/cover.jpg".to_string(),
            preview_url: None,
            external_url: Some("https://open.spotify.com/track/x".to_string()),
        };
        assert!(!meta.is_placeholder());
    }

    #[tokio::test]
    async fn test_placeholder_enricher_always_degrades() {
        let enricher = PlaceholderEnricher;
        let meta = enricher.fetch_metadata("Anything", "Anyone").await;
        assert!(meta.is_placeholder());
    }
}

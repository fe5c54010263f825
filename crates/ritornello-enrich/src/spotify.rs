//! Spotify Web API client and enricher.
//!
//! Authenticates with the client-credentials OAuth flow, caches the
//! bearer token until shortly before expiry, and resolves (title,
//! artist) pairs through the track search endpoint. The enricher on
//! top applies the system's one externally-visible failure policy:
//! any miss, timeout, or remote error degrades to placeholder
//! metadata, never to an error.

use std::sync::Arc;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::error::{EnrichError, EnrichResult};
use crate::metadata::{Enricher, TrackMetadata};
use crate::resilience::RateLimiter;

const SOURCE_NAME: &str = "Spotify";
const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SEARCH_URL: &str = "https://api.spotify.com/v1/search";

/// Refresh the token this long before Spotify says it expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Per-request timeout; a stalled call is treated like a miss.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Conservative bound well under Spotify's documented limits.
const REQUESTS_PER_SECOND: u32 = 5;

/// Client-credentials pair, configured via environment or config file.
#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl SpotifyCredentials {
    fn basic_auth(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", BASE64.encode(raw))
    }
}

// ---------------------------------------------------------------------------
// API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: TrackPage,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<FoundTrack>,
}

#[derive(Debug, Deserialize)]
struct FoundTrack {
    album: Album,
    preview_url: Option<String>,
    external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
struct Album {
    #[serde(default)]
    images: Vec<AlbumImage>,
}

#[derive(Debug, Deserialize)]
struct AlbumImage {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

impl FoundTrack {
    /// First album image, preview, and external link, taken verbatim.
    fn into_metadata(self) -> TrackMetadata {
        let cover_url = self
            .album
            .images
            .into_iter()
            .next()
            .map(|img| img.url)
            .unwrap_or_else(|| crate::metadata::DEFAULT_COVER_URL.to_string());
        TrackMetadata {
            cover_url,
            preview_url: self.preview_url,
            external_url: self.external_urls.spotify,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Spotify Web API client.
///
/// Wraps an HTTP client with a bounded timeout, a cached
/// client-credentials token, and a per-source rate limiter. Cloning
/// shares the token cache and the rate budget.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    credentials: SpotifyCredentials,
    token: Arc<Mutex<Option<CachedToken>>>,
    rate_limiter: RateLimiter,
}

impl SpotifyClient {
    /// Create a new client.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(credentials: SpotifyCredentials) -> EnrichResult<Self> {
        let http = Client::builder()
            .user_agent("ritornello/0.1.0 (https://github.com/ritornello-rs/ritornello)")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            credentials,
            token: Arc::new(Mutex::new(None)),
            rate_limiter: RateLimiter::new(REQUESTS_PER_SECOND),
        })
    }

    /// A valid bearer token, fetched or refreshed as needed.
    ///
    /// The cache lock is held across a refresh so concurrent callers
    /// never race to the token endpoint.
    async fn access_token(&self) -> EnrichResult<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if !token.is_expired() {
                return Ok(token.value.clone());
            }
        }

        log::debug!("requesting new Spotify access token");
        let response = self
            .http
            .post(TOKEN_URL)
            .header("Authorization", self.credentials.basic_auth())
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EnrichError::Auth {
                source_name: SOURCE_NAME.to_string(),
                message: format!("token endpoint returned {}", response.status()),
            });
        }

        let token: TokenResponse = response.json().await.map_err(|e| EnrichError::Parse {
            source_name: SOURCE_NAME.to_string(),
            message: e.to_string(),
        })?;

        let expires_in = Duration::from_secs(token.expires_in);
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + expires_in.saturating_sub(TOKEN_EXPIRY_MARGIN),
        });

        Ok(token.access_token)
    }

    /// Search for a track by title and artist.
    ///
    /// Returns the first match's metadata, or `None` when the catalog
    /// has no match. Mirrors the `track:<title> artist:<artist>` query
    /// shape of the search endpoint.
    pub async fn search_track(
        &self,
        title: &str,
        artist: &str,
    ) -> EnrichResult<Option<TrackMetadata>> {
        self.rate_limiter.acquire().await;
        let token = self.access_token().await?;

        let query = format!("track:{title} artist:{artist}");
        let response = self
            .http
            .get(SEARCH_URL)
            .header("Authorization", format!("Bearer {token}"))
            .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(EnrichError::RateLimited {
                source_name: SOURCE_NAME.to_string(),
            });
        }
        let response = response.error_for_status().map_err(|e| EnrichError::Http {
            source_name: SOURCE_NAME.to_string(),
            message: e.to_string(),
        })?;

        let result: SearchResponse = response.json().await.map_err(|e| EnrichError::Parse {
            source_name: SOURCE_NAME.to_string(),
            message: e.to_string(),
        })?;

        Ok(result.tracks.items.into_iter().next().map(FoundTrack::into_metadata))
    }
}

// ---------------------------------------------------------------------------
// Enricher
// ---------------------------------------------------------------------------

/// Enriches tracks with display metadata from Spotify.
///
/// Transient failures are retried with bounded exponential backoff;
/// anything still failing, and any zero-match search, degrades to
/// [`TrackMetadata::placeholder`].
#[derive(Debug, Clone)]
pub struct SpotifyEnricher {
    client: SpotifyClient,
}

impl SpotifyEnricher {
    /// Create a new enricher from credentials.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(credentials: SpotifyCredentials) -> EnrichResult<Self> {
        Ok(Self {
            client: SpotifyClient::new(credentials)?,
        })
    }
}

#[async_trait::async_trait]
impl Enricher for SpotifyEnricher {
    async fn fetch_metadata(&self, title: &str, artist: &str) -> TrackMetadata {
        let outcome = (|| async { self.client.search_track(title, artist).await })
            .retry(ExponentialBuilder::default().with_max_times(2))
            .when(EnrichError::is_transient)
            .notify(|err: &EnrichError, dur: Duration| {
                log::debug!("retrying Spotify search in {dur:?}: {err}");
            })
            .await;

        match outcome {
            Ok(Some(metadata)) => metadata,
            Ok(None) => {
                log::debug!("no Spotify match for {title} by {artist}; using placeholder");
                TrackMetadata::placeholder()
            }
            Err(e) => {
                log::warn!("Spotify lookup failed for {title} by {artist}: {e}");
                TrackMetadata::placeholder()
            }
        }
    }
}

//! Display-metadata enrichment for ritornello.
//!
//! Turns ranked [`ScoredTrack`](ritornello_core::ScoredTrack)s into
//! complete, render-ready recommendations by looking up cover art,
//! preview URLs, and external links in a third-party catalog
//! (Spotify). Remote misses and failures never escalate: every
//! recommendation is delivered, degraded to a placeholder when the
//! lookup comes up empty.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod metadata;
pub mod pipeline;
pub mod resilience;
pub mod spotify;

pub use error::{EnrichError, EnrichResult};
pub use metadata::{Enricher, PlaceholderEnricher, TrackMetadata, DEFAULT_COVER_URL};
pub use pipeline::{recommend_enriched, Recommendation};
pub use spotify::{SpotifyClient, SpotifyCredentials, SpotifyEnricher};

//! The track catalog: an ordered, immutable table of known tracks.
//!
//! Positions in the catalog are the index space of the
//! [`SimilarityMatrix`](crate::matrix::SimilarityMatrix): row and
//! column `i` both refer to the track at position `i`. The catalog is
//! loaded once at startup and never mutated.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One catalog entry, identified by its (title, artist) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Track title. The primary lookup key within a catalog.
    pub title: String,
    /// Artist name.
    pub artist: String,
}

impl Track {
    #[must_use]
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}

/// Ordered, immutable sequence of tracks with position-based identity.
///
/// Title lookups return the position of the first matching track.
/// Duplicate titles are tolerated (first match wins) but logged at
/// load so the ambiguity is visible to the operator.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog from tracks in load order.
    pub fn new(tracks: Vec<Track>) -> Self {
        let mut seen = HashSet::new();
        for track in &tracks {
            if !seen.insert(track.title.as_str()) {
                log::warn!(
                    "duplicate title {:?} in catalog; lookups resolve to the first occurrence",
                    track.title
                );
            }
        }
        Self { tracks }
    }

    /// Position of the first track whose title matches exactly.
    pub fn position(&self, title: &str) -> Result<usize> {
        self.tracks
            .iter()
            .position(|t| t.title == title)
            .ok_or_else(|| Error::NotFound {
                title: title.to_string(),
            })
    }

    /// The track at `position`, if in range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Track> {
        self.tracks.get(position)
    }

    /// All titles in load order. Deterministic, for populating a
    /// selection surface.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(|t| t.title.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

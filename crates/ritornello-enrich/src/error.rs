//! Enrichment error types.
//!
//! These errors stay inside the enrichment layer: the public
//! [`Enricher`](crate::metadata::Enricher) contract degrades every
//! failure to placeholder metadata instead of surfacing it.

use thiserror::Error;

/// Errors that can occur while talking to an external catalog.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// An HTTP request to the external catalog failed.
    #[error("HTTP error from {source_name}: {message}")]
    Http {
        source_name: String,
        message: String,
    },

    /// The external catalog returned a rate-limit response.
    #[error("rate limited by {source_name}")]
    RateLimited { source_name: String },

    /// Authentication with the external catalog failed.
    #[error("authentication with {source_name} failed: {message}")]
    Auth {
        source_name: String,
        message: String,
    },

    /// A response from the external catalog could not be parsed.
    #[error("parse error from {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// An error propagated from `reqwest` (connect failures, timeouts).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl EnrichError {
    /// Returns `true` when the error is transient and the operation may
    /// succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { .. } | Self::RateLimited { .. } => true,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::Auth { .. } | Self::Parse { .. } => false,
        }
    }
}

/// Convenience alias for enrichment results.
pub type EnrichResult<T> = std::result::Result<T, EnrichError>;

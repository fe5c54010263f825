//! Core domain model for ritornello.
//!
//! This crate defines the read-only track catalog, the precomputed
//! pairwise similarity matrix, the recommender that ranks neighbors
//! over them, and the startup-time loaders for both.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod matrix;
pub mod recommend;
pub mod store;

pub use catalog::{Catalog, Track};
pub use error::{Error, Result};
pub use matrix::SimilarityMatrix;
pub use recommend::{Recommender, ScoredTrack};

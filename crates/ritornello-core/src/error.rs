use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("not found: no track titled {title:?}")]
    NotFound { title: String },

    #[error("similarity matrix is {rows}x{cols} but the catalog has {tracks} tracks")]
    DimensionMismatch {
        tracks: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;

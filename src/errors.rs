use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeckError>;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read directory {path:?}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),
    #[error("failed to read file {path:?}: {source}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {path:?}: {reason}")]
    DecodeImage { path: PathBuf, reason: String },
    #[error("failed to create texture for {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
    #[error("a deck needs at least one slide")]
    EmptyDeck,
    #[error("print failed: {0}")]
    Print(String),
}

//! Service layer errors

use songwriter_core::SongwriterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Song file error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Song(#[from] SongwriterError),
    #[error("Song not found: {0}")]
    SongNotFound(String),
    #[error("Variation not found: {0}")]
    VariationNotFound(u32),
    #[error("Chord not found: {0}")]
    ChordNotFound(u32),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

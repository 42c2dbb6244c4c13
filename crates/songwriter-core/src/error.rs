//! Error types for songwriter

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SongwriterError {
    #[error("Unknown note: {0}")]
    UnknownNote(String),
    #[error("Unknown chord quality: {0}")]
    UnknownQuality(String),
    #[error("Unknown mode: {0}")]
    UnknownMode(String),
    #[error("Invalid time signature: {0}")]
    InvalidTimeSignature(String),
}

pub type Result<T> = std::result::Result<T, SongwriterError>;

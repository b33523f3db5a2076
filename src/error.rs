//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and codec errors, and provides semantic variants for
//! the failure modes of the cropping pipeline.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not load image at path: {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Saliency computation failed: {0}")]
    Saliency(String),

    #[error("Could not write output at path: {path}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn processing<E: std::fmt::Display>(e: E) -> Self {
        Error::Processing(e.to_string())
    }
}

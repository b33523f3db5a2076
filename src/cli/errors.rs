use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Provides a semantic variant for the missing-input case and converts
//! underlying I/O failures; every failure is terminal for its invocation.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input file not found at '{}'", path.display())]
    InputNotFound { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

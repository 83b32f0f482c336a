//! Error types for sm-output.

use sm_core::ResourceError;
use thiserror::Error;

/// Errors that can occur when rendering or writing simulation output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("frame allocation failed: {0}")]
    Resource(#[from] ResourceError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while writing a collection back to disk.
///
/// Read failures never appear here: a missing or malformed file loads as an
/// empty collection and is only logged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

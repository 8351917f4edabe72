// Mon Oct 12 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Duplicate method in pool: {0}")]
    DuplicateMethod(String),
    #[error("Insertion offset {offset} out of bounds for {method} ({len} instructions)")]
    OffsetOutOfBounds {
        method: String,
        offset: usize,
        len: usize,
    },
    #[error("Invalid method id: {0}")]
    InvalidId(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

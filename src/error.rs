/// Error types for the gallery core
///
/// None of these are fatal: each component recovers at its boundary
/// (empty catalog, empty reaction map, status message) and logs the cause.

use thiserror::Error;

/// Failures of the durable key-value store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not prepare storage directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode reaction map: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog record has invalid id 0")]
    ZeroId,

    #[error("duplicate catalog id {0}")]
    DuplicateId(u32),

    #[error("catalog ids are not contiguous: expected {expected}, found {found}")]
    NonContiguous { expected: u32, found: u32 },
}

/// Failures while building share links
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("invalid base url: {0}")]
    InvalidBase(#[from] url::ParseError),

    #[error("base url {0} cannot carry query parameters")]
    CannotBeABase(String),
}

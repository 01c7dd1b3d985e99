/// Catalog error types
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors raised while resolving or loading catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Playlist or album not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    /// Catalog file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON for the catalog schema
    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    /// Catalog content is inconsistent
    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl CatalogError {
    /// Create an invalid catalog error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

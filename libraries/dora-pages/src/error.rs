/// Page error types
use dora_catalog::CatalogError;
use thiserror::Error;

/// Result type alias using `PageError`
pub type Result<T> = std::result::Result<T, PageError>;

/// Errors raised while mounting a page or handling a UI event
#[derive(Error, Debug)]
pub enum PageError {
    /// Catalog lookup failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// No page is mounted at this path
    #[error("No page for route: {0}")]
    UnknownRoute(String),

    /// UI event string could not be parsed
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

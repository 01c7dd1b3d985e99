//! DoraMusic - Catalog
//!
//! Everything the pages render comes through a [`CatalogProvider`]: tracks,
//! playlists and albums, search, the Home grids and the Library tabs.
//! [`SampleCatalog`] is the in-memory implementation; it ships the
//! placeholder data and can also be loaded from a JSON file.
//!
//! # Example
//!
//! ```rust
//! use dora_catalog::{CatalogProvider, SampleCatalog};
//!
//! let catalog = SampleCatalog::builtin();
//!
//! let favs = catalog.playlist("dora-favs").unwrap();
//! assert_eq!(favs.songs.len(), 3);
//!
//! // Unknown ids fall back to the default playlist
//! let fallback = catalog.playlist_or_default("no-such-list").unwrap();
//! assert_eq!(fallback.id, "dora-favs");
//!
//! let results = catalog.search("perfume");
//! assert_eq!(results.artists.len(), 1);
//! ```

pub mod error;
mod provider;
mod sample;
pub mod types;

pub use error::{CatalogError, Result};
pub use provider::CatalogProvider;
pub use sample::SampleCatalog;
pub use types::{
    artwork_or_placeholder, CollectionKind, LibraryCollections, MediaItem, MediaKind,
    PlaylistDetails, SearchResults, SongEntry, PLACEHOLDER_ARTWORK,
};

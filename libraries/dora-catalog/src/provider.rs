/// Catalog provider trait
use crate::error::Result;
use crate::types::{LibraryCollections, MediaItem, PlaylistDetails, SearchResults};
use dora_playback::Track;

/// Source of everything the pages render
///
/// Pages share one provider read-only (`Arc<dyn CatalogProvider>`), so
/// implementors must be `Send + Sync`.
pub trait CatalogProvider: Send + Sync {
    /// Every playable track the catalog knows about
    fn tracks(&self) -> Vec<Track>;

    /// Look up a single track by id
    ///
    /// # Errors
    /// Returns `CatalogError::TrackNotFound` if no track has this id
    fn track(&self, id: &str) -> Result<Track>;

    /// Look up a playlist or album by id
    ///
    /// # Errors
    /// Returns `CatalogError::PlaylistNotFound` if no collection has this id
    fn playlist(&self, id: &str) -> Result<PlaylistDetails>;

    /// Id shown when a playlist route names an unknown collection
    fn default_playlist_id(&self) -> &str;

    /// Songs and grid cards matching `query`
    ///
    /// An empty or whitespace-only query yields empty results.
    fn search(&self, query: &str) -> SearchResults;

    /// Home page "Featured Playlists & Albums"
    fn featured(&self) -> Vec<MediaItem>;

    /// Home page "New Releases"
    fn new_releases(&self) -> Vec<MediaItem>;

    /// The user's saved collections
    fn library(&self) -> LibraryCollections;

    /// Lyrics for a track, if any
    fn lyrics(&self, _track_id: &str) -> Option<String> {
        None
    }

    /// Resolve a playlist, falling back to the default collection
    ///
    /// # Errors
    /// Returns an error only if the default collection is missing too
    fn playlist_or_default(&self, id: &str) -> Result<PlaylistDetails> {
        match self.playlist(id) {
            Ok(details) => Ok(details),
            Err(err) => {
                tracing::warn!(
                    playlist_id = %id,
                    fallback = %self.default_playlist_id(),
                    "{}, showing default playlist",
                    err
                );
                self.playlist(self.default_playlist_id())
            }
        }
    }
}

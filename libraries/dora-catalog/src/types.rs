//! Catalog data types
//!
//! These mirror what the pages list: song rows, grid cards and collection
//! headers. Every type round-trips through JSON so a catalog can be swapped
//! in from a file.

use dora_playback::{parse_duration, Track};
use serde::{Deserialize, Serialize};

/// Artwork shown when neither a song nor its collection has any
pub const PLACEHOLDER_ARTWORK: &str = "/placeholder.svg";

/// Pick the first non-empty artwork URL, falling back to the placeholder
pub fn artwork_or_placeholder<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
        .unwrap_or(PLACEHOLDER_ARTWORK)
        .to_string()
}

/// A song list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    pub id: String,
    pub title: String,
    pub artist: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Display duration (`M:SS`)
    pub duration: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,

    #[serde(default)]
    pub is_liked: bool,
}

impl SongEntry {
    /// Duration in seconds parsed from the display label
    ///
    /// Loaded catalogs reject malformed labels; 0 for hand-built rows.
    pub fn duration_secs(&self) -> u32 {
        parse_duration(&self.duration).unwrap_or(0)
    }

    /// Build the player track for this row
    ///
    /// Artwork falls back to `collection_artwork`, then to the placeholder.
    pub fn to_track(&self, collection_artwork: Option<&str>) -> Track {
        Track::new(
            self.id.clone(),
            self.title.clone(),
            self.artist.clone(),
            artwork_or_placeholder([self.image_url.as_deref(), collection_artwork]),
            self.duration_secs(),
        )
    }

    /// Case-insensitive match against title, artist and album
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.artist.to_lowercase().contains(needle_lower)
            || self
                .album
                .as_ref()
                .is_some_and(|album| album.to_lowercase().contains(needle_lower))
    }
}

/// Kind of a grid card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Playlist,
    Album,
    Artist,
}

/// A grid card linking to a playlist, album or artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub image_url: String,

    /// Route the card navigates to
    pub href: String,

    pub kind: MediaKind,
}

impl MediaItem {
    /// Case-insensitive match against title and subtitle
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self
                .subtitle
                .as_ref()
                .is_some_and(|s| s.to_lowercase().contains(needle_lower))
    }
}

/// Kind of a song collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionKind {
    Playlist,
    Album,
}

/// A playlist or album with its songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDetails {
    pub id: String,
    pub name: String,
    pub description: String,
    pub creator: String,
    pub image_url: String,
    pub kind: CollectionKind,
    pub songs: Vec<SongEntry>,
}

impl PlaylistDetails {
    /// Player tracks for every song, in list order
    pub fn tracks(&self) -> Vec<Track> {
        self.songs
            .iter()
            .map(|song| song.to_track(Some(&self.image_url)))
            .collect()
    }

    /// Find a song row by id
    pub fn song(&self, id: &str) -> Option<&SongEntry> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Sum of the song durations in seconds
    pub fn total_duration_secs(&self) -> u32 {
        self.songs.iter().map(SongEntry::duration_secs).sum()
    }
}

/// The user's saved collections, as the Library page tabs show them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryCollections {
    pub playlists: Vec<MediaItem>,
    pub liked_songs: Vec<SongEntry>,
    pub albums: Vec<MediaItem>,
    pub artists: Vec<MediaItem>,
}

/// Results of a catalog search, grouped the way the Search page tabs are
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub songs: Vec<SongEntry>,
    pub artists: Vec<MediaItem>,
    pub albums: Vec<MediaItem>,
    pub playlists: Vec<MediaItem>,
}

impl SearchResults {
    /// Empty result set for `query`
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Add a grid card to the group matching its kind
    pub fn push_media(&mut self, item: MediaItem) {
        match item.kind {
            MediaKind::Artist => self.artists.push(item),
            MediaKind::Album => self.albums.push(item),
            MediaKind::Playlist => self.playlists.push(item),
        }
    }

    /// Total number of hits across groups
    pub fn total(&self) -> usize {
        self.songs.len() + self.artists.len() + self.albums.len() + self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(image_url: Option<&str>) -> SongEntry {
        SongEntry {
            id: "s1".to_string(),
            title: "Mirai no Museum".to_string(),
            artist: "Perfume".to_string(),
            album: Some("LEVEL3".to_string()),
            duration: "3:21".to_string(),
            image_url: image_url.map(str::to_string),
            track_number: Some(1),
            is_liked: true,
        }
    }

    #[test]
    fn to_track_parses_duration() {
        let track = song(Some("https://img/s1.jpg")).to_track(None);
        assert_eq!(track.duration_secs, 201);
        assert_eq!(track.artwork_url, "https://img/s1.jpg");
    }

    #[test]
    fn artwork_falls_back_to_collection_then_placeholder() {
        assert_eq!(
            song(None).to_track(Some("https://img/list.jpg")).artwork_url,
            "https://img/list.jpg"
        );
        assert_eq!(song(Some("")).to_track(None).artwork_url, PLACEHOLDER_ARTWORK);
        assert_eq!(song(None).to_track(Some("  ")).artwork_url, PLACEHOLDER_ARTWORK);
    }

    #[test]
    fn malformed_duration_is_zero() {
        let mut entry = song(None);
        entry.duration = "soon".to_string();
        assert_eq!(entry.duration_secs(), 0);
    }

    #[test]
    fn song_matches_any_field() {
        let entry = song(None);
        assert!(entry.matches("museum"));
        assert!(entry.matches("perf"));
        assert!(entry.matches("level"));
        assert!(!entry.matches("doraemon"));
    }

    #[test]
    fn media_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MediaKind::Artist).unwrap(), "\"artist\"");
    }

    #[test]
    fn optional_song_fields_default_when_missing() {
        let json = r#"{"id":"x","title":"T","artist":"A","duration":"1:00"}"#;
        let entry: SongEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.album, None);
        assert!(!entry.is_liked);
        assert_eq!(entry.duration_secs(), 60);
    }

    #[test]
    fn push_media_groups_by_kind() {
        let mut results = SearchResults::empty("perfume");
        results.push_media(MediaItem {
            id: "artist-search1".to_string(),
            title: "Perfume (Artist)".to_string(),
            subtitle: Some("Artist".to_string()),
            image_url: String::new(),
            href: "/artist/perfume".to_string(),
            kind: MediaKind::Artist,
        });
        assert_eq!(results.artists.len(), 1);
        assert_eq!(results.total(), 1);
        assert!(!results.is_empty());
    }
}

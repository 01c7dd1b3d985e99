//! In-memory catalog
//!
//! `SampleCatalog::builtin()` carries the DoraMusic placeholder data.
//! `SampleCatalog::from_path()` loads the same shape from a JSON file.

use crate::error::{CatalogError, Result};
use crate::provider::CatalogProvider;
use crate::types::{
    CollectionKind, LibraryCollections, MediaItem, MediaKind, PlaylistDetails, SearchResults,
    SongEntry,
};
use dora_playback::{parse_duration, Track};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Number of cards in the Home "Featured" grid
const FEATURED_COUNT: usize = 6;

/// First card of the Home "New Releases" grid
const NEW_RELEASES_START: usize = 2;

/// Catalog held entirely in memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCatalog {
    /// Collection shown for unknown playlist ids
    pub default_playlist: String,

    /// Tracks not listed in any collection (page placeholders)
    #[serde(default)]
    pub player_tracks: Vec<Track>,

    #[serde(default)]
    pub playlists: Vec<PlaylistDetails>,

    /// Cards for the Home grids
    #[serde(default)]
    pub home: Vec<MediaItem>,

    #[serde(default)]
    pub library: LibraryCollections,

    /// Extra songs only reachable through search
    #[serde(default)]
    pub search_songs: Vec<SongEntry>,

    /// Extra cards only reachable through search
    #[serde(default)]
    pub search_media: Vec<MediaItem>,

    /// Lyrics by track id
    #[serde(default)]
    pub lyrics: BTreeMap<String, String>,
}

impl SampleCatalog {
    /// Parse a catalog from JSON
    ///
    /// # Errors
    /// Returns `CatalogError::Parse` on malformed JSON and
    /// `CatalogError::Invalid` if the default playlist is missing or a song
    /// duration is not an `M:SS` label
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise as
    /// [`SampleCatalog::from_json_str`]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            playlists = catalog.playlists.len(),
            "Loaded catalog file"
        );
        Ok(catalog)
    }

    /// Serialize the catalog as pretty JSON
    ///
    /// # Errors
    /// Returns `CatalogError::Parse` if serialization fails
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if !self.playlists.iter().any(|p| p.id == self.default_playlist) {
            return Err(CatalogError::invalid(format!(
                "default playlist '{}' is not in the catalog",
                self.default_playlist
            )));
        }
        if let Some((song, _)) = self
            .song_rows()
            .find(|(song, _)| parse_duration(&song.duration).is_none())
        {
            return Err(CatalogError::invalid(format!(
                "song '{}' has malformed duration '{}'",
                song.id, song.duration
            )));
        }
        Ok(())
    }

    /// Every song row with the artwork of the collection it came from
    fn song_rows(&self) -> impl Iterator<Item = (&SongEntry, Option<&str>)> {
        self.playlists
            .iter()
            .flat_map(|p| p.songs.iter().map(move |s| (s, Some(p.image_url.as_str()))))
            .chain(self.library.liked_songs.iter().map(|s| (s, None)))
            .chain(self.search_songs.iter().map(|s| (s, None)))
    }

    fn all_media(&self) -> impl Iterator<Item = &MediaItem> {
        self.search_media
            .iter()
            .chain(self.home.iter())
            .chain(self.library.playlists.iter())
            .chain(self.library.albums.iter())
            .chain(self.library.artists.iter())
    }

    /// The DoraMusic placeholder catalog
    #[rustfmt::skip]
    pub fn builtin() -> Self {
        let playlists = vec![
            PlaylistDetails {
                id: "dora-favs".to_string(),
                name: "Doraemon's Favorite Mix".to_string(),
                description:
                    "A collection of upbeat and futuristic tunes personally picked by Doraemon!"
                        .to_string(),
                creator: "Doraemon".to_string(),
                image_url: IMG_DORA_FAVS.to_string(),
                kind: CollectionKind::Playlist,
                songs: vec![
                    song("s1", "Mirai no Museum", "Perfume", "LEVEL3", "3:21", IMG_S1, 1, true),
                    song("s2", "Yume wo Kanaete Doraemon", "mao", "Doraemon Soundtrack", "4:05", IMG_S2, 2, false),
                    song("s3", "Himawari no Yakusoku", "Motohiro Hata", "Stand By Me Doraemon", "5:15", IMG_S3, 3, true),
                ],
            },
            PlaylistDetails {
                id: "gadget-grooves".to_string(),
                name: "Gadget Grooves".to_string(),
                description: "Nobita's favorite tunes for inventing (or napping).".to_string(),
                creator: "Nobita Nobi".to_string(),
                image_url: IMG_GADGET.to_string(),
                kind: CollectionKind::Album,
                songs: vec![
                    song("g1", "Pocket Power", "The Gadgeteers", "Gadget Grooves", "2:55", "https://placekitten.com/g/100/100", 1, false),
                    song("g2", "Anywhere Doorstep", "The Gadgeteers", "Gadget Grooves", "3:30", "https://placekitten.com/101/101", 2, true),
                ],
            },
        ];

        let home = vec![
            card("p1", "Doraemon's Favorite Mix", "Curated by Doraemon", IMG_DORA_FAVS, "/playlist/dora-favs", MediaKind::Playlist),
            card("a1", "Gadget Grooves", "Nobita Nobi", IMG_GADGET, "/playlist/gadget-grooves", MediaKind::Album),
            card("p2", "Future Funk Adventures", "Sounds from the 22nd Century", IMG_FUTURE_FUNK, "/playlist/future-funk", MediaKind::Playlist),
            card("a2", "Time Travel Anthems", "Various Artists", IMG_TIME_TRAVEL, "/playlist/time-anthems", MediaKind::Album),
            card("p3", "Relaxing Vibes with Dorami", "Chill beats for studying", IMG_DORAMI, "/playlist/dorami-chill", MediaKind::Playlist),
            card("a3", "Nobita's Acoustic Dreams", "Nobita Nobi", IMG_ACOUSTIC, "/playlist/nobita-acoustic", MediaKind::Album),
        ];

        let library = LibraryCollections {
            playlists: vec![
                card("lib-p1", "Study Beats", "My focus playlist", IMG_DORAMI, "/playlist/study-beats", MediaKind::Playlist),
                card("lib-p2", "Workout Jams", "High energy tracks", IMG_GADGET, "/playlist/workout-jams", MediaKind::Playlist),
            ],
            liked_songs: vec![
                song("liked1", "Doraemon Theme (Acoustic)", "Nobita", "Home Covers", "2:50", IMG_ACOUSTIC, 1, true),
                song("liked2", "Shizuka's Serenade", "Shizuka Minamoto", "Violin Pieces", "3:15", IMG_FUTURE_FUNK, 2, true),
            ],
            albums: vec![card(
                "lib-a1",
                "Doraemon The Movie 2023 OST",
                "Original Soundtrack",
                IMG_DORA_COVER,
                "/playlist/dora-movie-ost",
                MediaKind::Album,
            )],
            artists: Vec::new(),
        };

        let search_songs = vec![
            song("s1", "Mirai no Museum (Search Result)", "Perfume", "LEVEL3", "3:21", IMG_S1, 1, false),
            song("s2", "Yume wo Kanaete Doraemon (Search Result)", "mao", "Doraemon Soundtrack", "4:05", IMG_S2, 2, true),
        ];

        let search_media = vec![
            card("p-search1", "Doraemon Hits (Playlist)", "Playlist", IMG_DORA_FAVS, "/playlist/dora-hits", MediaKind::Playlist),
            card("a-search1", "Future Sounds (Album)", "Album by Various Artists", IMG_GADGET, "/playlist/future-sounds-album", MediaKind::Album),
            card("artist-search1", "Perfume (Artist)", "Artist", IMG_PERFUME, "/artist/perfume", MediaKind::Artist),
        ];

        let player_tracks = vec![
            Track::new("dora-1", "Doraemon no Uta", "Kumiko Osugi", IMG_DORA_COVER, 180),
            Track::new("dora-lib1", "My Library Anthem", "User Choice", IMG_LIBRARY, 190),
            Track::new(
                "dora-np1",
                "Doraemon no Uta (Full Version)",
                "Kumiko Osugi & Yoichirou Yoshikawa",
                IMG_DORA_COVER,
                245,
            ),
            Track::new("dora-s1", "Searching for Melodies", "Doraemon AI", IMG_SEARCH, 200),
        ];

        let mut lyrics = BTreeMap::new();
        lyrics.insert("dora-np1".to_string(), DORAEMON_NO_UTA_LYRICS.trim().to_string());

        Self {
            default_playlist: "dora-favs".to_string(),
            player_tracks,
            playlists,
            home,
            library,
            search_songs,
            search_media,
            lyrics,
        }
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogProvider for SampleCatalog {
    fn tracks(&self) -> Vec<Track> {
        let mut seen = HashSet::new();
        let standalone = self.player_tracks.iter().cloned();
        let rows = self.song_rows().map(|(song, art)| song.to_track(art));

        standalone
            .chain(rows)
            .filter(|track| seen.insert(track.id.clone()))
            .collect()
    }

    fn track(&self, id: &str) -> Result<Track> {
        if let Some(track) = self.player_tracks.iter().find(|t| t.id == id) {
            return Ok(track.clone());
        }
        self.song_rows()
            .find(|(song, _)| song.id == id)
            .map(|(song, art)| song.to_track(art))
            .ok_or_else(|| CatalogError::TrackNotFound(id.to_string()))
    }

    fn playlist(&self, id: &str) -> Result<PlaylistDetails> {
        self.playlists
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::PlaylistNotFound(id.to_string()))
    }

    fn default_playlist_id(&self) -> &str {
        &self.default_playlist
    }

    fn search(&self, query: &str) -> SearchResults {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SearchResults::empty(query);
        }
        let needle = trimmed.to_lowercase();
        let mut results = SearchResults::empty(trimmed);

        // Search-only rows come first so their ids win over collection rows
        let mut seen_songs = HashSet::new();
        let songs = self
            .search_songs
            .iter()
            .chain(self.song_rows().map(|(song, _)| song))
            .filter(|song| song.matches(&needle))
            .filter(|song| seen_songs.insert(song.id.clone()))
            .cloned();
        results.songs.extend(songs);

        let mut seen_media = HashSet::new();
        for item in self.all_media() {
            if item.matches(&needle) && seen_media.insert(item.id.clone()) {
                results.push_media(item.clone());
            }
        }

        debug!(query = %trimmed, hits = results.total(), "Catalog search");
        results
    }

    fn featured(&self) -> Vec<MediaItem> {
        self.home.iter().take(FEATURED_COUNT).cloned().collect()
    }

    fn new_releases(&self) -> Vec<MediaItem> {
        self.home
            .iter()
            .take(FEATURED_COUNT)
            .skip(NEW_RELEASES_START)
            .rev()
            .cloned()
            .collect()
    }

    fn library(&self) -> LibraryCollections {
        self.library.clone()
    }

    fn lyrics(&self, track_id: &str) -> Option<String> {
        self.lyrics.get(track_id).cloned()
    }
}

// ===== Builtin data =====

#[allow(clippy::too_many_arguments)]
fn song(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration: &str,
    image_url: &str,
    track_number: u32,
    is_liked: bool,
) -> SongEntry {
    SongEntry {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: Some(album.to_string()),
        duration: duration.to_string(),
        image_url: Some(image_url.to_string()),
        track_number: Some(track_number),
        is_liked,
    }
}

fn card(
    id: &str,
    title: &str,
    subtitle: &str,
    image_url: &str,
    href: &str,
    kind: MediaKind,
) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        image_url: image_url.to_string(),
        href: href.to_string(),
        kind,
    }
}

const IMG_DORA_COVER: &str = "https://i.scdn.co/image/ab67616d0000b2737f520093a9897999115399a6";
const IMG_LIBRARY: &str = "https://i.scdn.co/image/ab67616d00001e02a9a9a9a9a9a9a9a9a9a9a9a9";
const IMG_SEARCH: &str = "https://i.scdn.co/image/ab67616d00001e02b9f9f5f5a7a7a7a7a7a7a7a7";
const IMG_PERFUME: &str = "https://i.scdn.co/image/ab676161000051747f520093a9897999115399a6";
const IMG_S1: &str = "https://i.scdn.co/image/ab67616d00001e02e7a4a9f5c4a8a1b8b8b0c1c5";
const IMG_S2: &str = "https://i.scdn.co/image/ab67616d00001e02e0b9a2a8b8c8a7b1a2a5c6a0";
const IMG_S3: &str = "https://i.scdn.co/image/ab67616d00001e02f7b4b5b0b1b0b2b2b1b0b2b2";
const IMG_DORA_FAVS: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRk0_gMW3LKn43H7GzH5Hjtyf6mJ0jTqS0T6Q&s";
const IMG_GADGET: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR09Xh7H5f8tqY6E9ZzNqJ0cThVpZ7J_D_rAg&s";
const IMG_FUTURE_FUNK: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSpL_x2FNUNT0r5uM8p5Rb2u8C9u53bWv5k4w&s";
const IMG_TIME_TRAVEL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTq8q9rP9sW7E_8D3Nn4GzY_qXyJ-ZzKjR7sQ&s";
const IMG_DORAMI: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR_9z0LQY_m8Q8E_2e9XwXpK5R9P_q3n7vT9g&s";
const IMG_ACOUSTIC: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQw_FNGxY_Rz5a7wP6qXBq3kL3j-Z_yI0oF6A&s";

const DORAEMON_NO_UTA_LYRICS: &str = "
An an an
Tottemo daisuki
Doraemon

[Verse 1]
Shukudai touban shiken ni otsukai
Anna koto konna koto taihen dakedo
Minna minna minna tasukete kureru
Benrina dougu de tasukete kureru

[Chorus]
Omocha no heitai da toccha!
Sora wo jiyuu ni tobitai na
Hai! Takekoputaa!
An an an
Tottemo daisuki
Doraemon
";

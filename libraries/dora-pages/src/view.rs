//! View models
//!
//! Plain serialisable snapshots a renderer binds to. Building one never
//! mutates state; time labels are computed here from the player's progress.

use dora_catalog::{artwork_or_placeholder, MediaItem, SongEntry};
use dora_playback::{
    PlaybackStatus, Player, Queue, RepeatMode, ShuffleMode, Track, Volume, VolumeIcon,
};
use serde::{Deserialize, Serialize};

/// Track shown in the player bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackView {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub artwork_url: String,
    pub duration_secs: u32,
}

impl From<&Track> for TrackView {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            artist: track.artist.clone(),
            artwork_url: artwork_or_placeholder([Some(track.artwork_url.as_str())]),
            duration_secs: track.duration_secs,
        }
    }
}

/// The persistent player bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBarView {
    pub track: Option<TrackView>,
    pub status: PlaybackStatus,
    pub is_playing: bool,
    pub progress_percent: f64,

    /// Elapsed time label (`M:SS`)
    pub elapsed: String,

    /// Total length label (`M:SS`)
    pub total: String,

    /// Stored volume level
    pub volume: u8,

    /// Level actually reaching the output (0 when muted)
    pub effective_volume: u8,
    pub is_muted: bool,
    pub volume_icon: VolumeIcon,

    pub shuffle: ShuffleMode,
    pub repeat: RepeatMode,

    /// Upcoming queue entries
    pub up_next: usize,
}

impl PlayerBarView {
    pub fn build(player: &Player, volume: &Volume, queue: &Queue) -> Self {
        Self {
            track: player.current_track().map(TrackView::from),
            status: player.status(),
            is_playing: player.is_playing(),
            progress_percent: player.progress_percent(),
            elapsed: player.elapsed_label(),
            total: player.total_label(),
            volume: volume.level(),
            effective_volume: volume.effective_level(),
            is_muted: volume.is_muted(),
            volume_icon: volume.icon(),
            shuffle: queue.shuffle(),
            repeat: queue.repeat(),
            up_next: queue.len(),
        }
    }
}

/// A song list row with its highlight state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRowView {
    #[serde(flatten)]
    pub song: SongEntry,

    /// Row artwork with fallbacks applied
    pub artwork_url: String,
    pub is_current_track: bool,

    /// Current track and playing
    pub is_playing: bool,
}

/// Build rows for `songs`, highlighting the player's current track
pub fn song_rows(
    songs: &[SongEntry],
    player: &Player,
    fallback_artwork: Option<&str>,
) -> Vec<SongRowView> {
    let current_id = player.current_track().map(|t| t.id.as_str());
    songs
        .iter()
        .map(|song| {
            let is_current_track = current_id == Some(song.id.as_str());
            SongRowView {
                artwork_url: artwork_or_placeholder([song.image_url.as_deref(), fallback_artwork]),
                is_current_track,
                is_playing: is_current_track && player.status() == PlaybackStatus::Playing,
                song: song.clone(),
            }
        })
        .collect()
}

/// A grid card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    #[serde(flatten)]
    pub item: MediaItem,
}

impl From<&MediaItem> for CardView {
    fn from(item: &MediaItem) -> Self {
        let mut item = item.clone();
        item.image_url = artwork_or_placeholder([Some(item.image_url.as_str())]);
        Self { item }
    }
}

pub fn cards(items: &[MediaItem]) -> Vec<CardView> {
    items.iter().map(CardView::from).collect()
}

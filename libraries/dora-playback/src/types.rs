//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single playable item
///
/// Immutable once selected; the player replaces it wholesale on track change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier from the catalog
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Artwork image URL (may be empty; renderers substitute a placeholder)
    pub artwork_url: String,

    /// Track length in whole seconds
    pub duration_secs: u32,
}

impl Track {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        artwork_url: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            artwork_url: artwork_url.into(),
            duration_secs,
        }
    }

    /// Track length as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }
}

/// Playback status
///
/// Derived from the player's state: no track is `Idle`, otherwise the
/// playing flag decides between `Playing` and `Paused`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// No track loaded
    Idle,

    /// Track loaded, not advancing
    Paused,

    /// Track loaded, advancing
    Playing,
}

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when queue ends
    #[default]
    Off,

    /// Loop entire queue
    All,

    /// Loop current track only
    One,
}

impl RepeatMode {
    /// Next mode in the UI toggle cycle: Off → All → One → Off
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        }
    }
}

/// Shuffle mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// No shuffling
    #[default]
    Off,

    /// Pure random shuffle
    Random,

    /// Smart shuffle (spread artists apart)
    Smart,
}

/// Configuration for the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
///
/// Starting volume is per page (see the page presets), not part of this.
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Level restored when unmuting from a stored level of 0 (default: 50)
    pub unmute_level: u8,

    /// Initial shuffle mode (default: Off)
    pub shuffle: ShuffleMode,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Seconds into a track after which "previous" restarts it (default: 3)
    pub restart_threshold_secs: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            unmute_level: 50,
            shuffle: ShuffleMode::Off,
            repeat: RepeatMode::Off,
            restart_threshold_secs: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.unmute_level, 50);
        assert_eq!(config.shuffle, ShuffleMode::Off);
        assert_eq!(config.repeat, RepeatMode::Off);
        assert_eq!(config.restart_threshold_secs, 3);
    }

    #[test]
    fn track_duration() {
        let track = Track::new("s1", "Mirai no Museum", "Perfume", "", 201);
        assert_eq!(track.duration(), Duration::from_secs(201));
    }

    #[test]
    fn repeat_cycle_visits_every_mode() {
        let mut mode = RepeatMode::Off;
        mode = mode.cycle();
        assert_eq!(mode, RepeatMode::All);
        mode = mode.cycle();
        assert_eq!(mode, RepeatMode::One);
        mode = mode.cycle();
        assert_eq!(mode, RepeatMode::Off);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: PlayerConfig = serde_json::from_str(r#"{"unmute_level": 30}"#).unwrap();
        assert_eq!(config.unmute_level, 30);
        assert_eq!(config.restart_threshold_secs, 3);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = serde_json::from_str::<PlayerConfig>(r#"{"volume": 40}"#);
        assert!(result.is_err());
    }
}

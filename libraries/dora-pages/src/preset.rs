//! Initial player state per page

use dora_playback::clamp_percent;
use serde::{Deserialize, Serialize};

/// Player bar state a page mounts with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePreset {
    /// Catalog id of the track loaded on mount, if any
    pub track_id: Option<String>,
    pub playing: bool,
    pub progress: f64,
    pub volume: u8,
}

impl PagePreset {
    fn new(track_id: Option<&str>, playing: bool, progress: f64, volume: u8) -> Self {
        Self {
            track_id: track_id.map(str::to_string),
            playing,
            progress,
            volume,
        }
    }

    pub fn home() -> Self {
        Self::new(Some("dora-1"), false, 30.0, 70)
    }

    pub fn library() -> Self {
        Self::new(Some("dora-lib1"), false, 50.0, 80)
    }

    pub fn now_playing() -> Self {
        Self::new(Some("dora-np1"), true, 25.0, 65)
    }

    pub fn search() -> Self {
        Self::new(Some("dora-s1"), false, 10.0, 60)
    }

    pub fn playlist() -> Self {
        Self::new(None, false, 0.0, 75)
    }

    /// Apply configured overrides on top of this preset
    pub fn with_override(mut self, overrides: &PresetOverride) -> Self {
        if let Some(volume) = overrides.volume {
            self.volume = volume.min(100);
        }
        if let Some(progress) = overrides.progress {
            self.progress = clamp_percent(progress);
        }
        if let Some(playing) = overrides.playing {
            self.playing = playing;
        }
        self
    }
}

/// Optional per-page overrides, as read from configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetOverride {
    pub volume: Option<u8>,
    pub progress: Option<f64>,
    pub playing: Option<bool>,
}

/// Presets for every page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePresets {
    pub home: PagePreset,
    pub library: PagePreset,
    pub now_playing: PagePreset,
    pub search: PagePreset,
    pub playlist: PagePreset,
}

impl Default for PagePresets {
    fn default() -> Self {
        Self {
            home: PagePreset::home(),
            library: PagePreset::library(),
            now_playing: PagePreset::now_playing(),
            search: PagePreset::search(),
            playlist: PagePreset::playlist(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_fields() {
        let preset = PagePreset::home().with_override(&PresetOverride {
            volume: Some(20),
            progress: None,
            playing: Some(true),
        });

        assert_eq!(preset.track_id.as_deref(), Some("dora-1"));
        assert_eq!(preset.volume, 20);
        assert_eq!(preset.progress, 30.0);
        assert!(preset.playing);
    }

    #[test]
    fn overrides_are_clamped() {
        let preset = PagePreset::search().with_override(&PresetOverride {
            volume: Some(250),
            progress: Some(-5.0),
            playing: None,
        });

        assert_eq!(preset.volume, 100);
        assert_eq!(preset.progress, 0.0);
    }

    #[test]
    fn playlist_starts_empty() {
        let preset = PagePresets::default().playlist;
        assert!(preset.track_id.is_none());
        assert_eq!(preset.volume, 75);
    }
}

//! Playback Events
//!
//! Event-based communication for UI synchronization.
//! The player records an event for every transition; the UI drains them.

use crate::types::PlaybackStatus;
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// Playback status changed (idle, paused, playing)
    StateChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// A different track became current
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Progress moved (seek, restart or tick)
    ProgressChanged {
        /// New progress percentage (0-100)
        progress_percent: f64,
    },

    /// Track reached 100% while playing
    TrackFinished {
        /// ID of the finished track
        track_id: String,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// Stored volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Queue changed (tracks added/removed/reordered)
    QueueChanged {
        /// Number of upcoming tracks
        length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = PlaybackEvent::StateChanged {
            status: PlaybackStatus::Playing,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "state_changed");
        assert_eq!(json["status"], "Playing");
    }

    #[test]
    fn track_changed_round_trips() {
        let event = PlaybackEvent::TrackChanged {
            track_id: "s2".to_string(),
            previous_track_id: Some("s1".to_string()),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: PlaybackEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

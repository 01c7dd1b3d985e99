//! DoraMusic - Player State
//!
//! The state behind the persistent player bar, shared by every page.
//!
//! This crate provides:
//! - Time formatting (`M:SS` labels from progress percentage + duration)
//! - Volume control (0-100%, mute that preserves the level)
//! - Player state holder (Idle / Paused / Playing, seek, skip, tick)
//! - Two-tier play queue with shuffle (Random + Smart) and repeat (Off, All, One)
//! - Playback events for UI synchronization
//!
//! # Architecture
//!
//! There is no audio engine: "playback" is a playing flag plus a progress
//! percentage. What plays next is decided by a [`TrackSequencer`]; [`Queue`]
//! is the built-in one.
//!
//! # Example: Player Bar
//!
//! ```rust
//! use dora_playback::{format_time, Player, PlaybackStatus, Track, Volume};
//!
//! let mut player = Player::default();
//! let mut volume = Volume::new(70);
//!
//! player.select_track(Track::new("s1", "Mirai no Museum", "Perfume", "", 200));
//! player.seek(50.0);
//! assert_eq!(player.elapsed_label(), "1:40");
//! assert_eq!(format_time(50.0, 200), "1:40");
//!
//! player.toggle_play_pause();
//! assert_eq!(player.status(), PlaybackStatus::Paused);
//!
//! volume.toggle_mute();
//! assert_eq!(volume.effective_level(), 0);
//! assert_eq!(volume.level(), 70);
//! ```
//!
//! # Example: Queue, Shuffle and Repeat
//!
//! ```rust
//! use dora_playback::{Player, Queue, RepeatMode, ShuffleMode, Track};
//!
//! let mut queue = Queue::with_modes(ShuffleMode::Off, RepeatMode::All);
//! queue.set_source(vec![
//!     Track::new("s1", "Mirai no Museum", "Perfume", "", 201),
//!     Track::new("s2", "Yume wo Kanaete Doraemon", "mao", "", 245),
//! ]);
//!
//! let mut player = Player::default();
//! player.next(&mut queue);
//! player.next(&mut queue);
//! player.next(&mut queue); // wraps around
//! assert_eq!(player.current_track().unwrap().id, "s1");
//!
//! queue.set_shuffle(ShuffleMode::Smart);
//! ```

mod error;
mod events;
mod player;
mod queue;
mod sequencer;
mod shuffle;
mod time;
pub mod types;
mod volume;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use player::Player;
pub use queue::Queue;
pub use sequencer::{NoSequencer, TrackSequencer};
pub use shuffle::shuffle_tracks;
pub use time::{clamp_percent, elapsed_secs, format_duration, format_time, parse_duration};
pub use types::{PlaybackStatus, PlayerConfig, RepeatMode, ShuffleMode, Track};
pub use volume::{Volume, VolumeIcon, DEFAULT_UNMUTE_LEVEL};

//! Two-tier play queue
//!
//! Spotify-style ordering that feeds the player's next/previous:
//! - Explicit queue: tracks the user added, played before anything else
//! - Source queue: the playlist/album being played, walked by index
//!
//! ```text
//! Currently Playing: source[position] (or an explicit track)
//! ─────────────────────────────
//! Explicit Queue (play next):
//!   - Track B (user added)
//! ─────────────────────────────
//! Source Queue (after position):
//!   - Track D
//!   - Track E
//! ```

use crate::error::{PlaybackError, Result};
use crate::sequencer::TrackSequencer;
use crate::shuffle::shuffle_tracks;
use crate::types::{RepeatMode, ShuffleMode, Track};
use std::collections::VecDeque;
use tracing::debug;

/// Two-tier queue with shuffle and repeat
#[derive(Debug, Clone, Default)]
pub struct Queue {
    /// Tracks explicitly added by user (play next)
    explicit: VecDeque<Track>,

    /// Source tracks in play order (shuffled when shuffle is on)
    source: Vec<Track>,

    /// Source tracks in their original order
    original_source: Vec<Track>,

    /// Index of the current source track, `None` before the first one
    position: Option<usize>,

    /// The last track handed out came from the explicit queue
    on_explicit: bool,

    shuffle: ShuffleMode,
    repeat: RepeatMode,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with initial shuffle/repeat modes
    pub fn with_modes(shuffle: ShuffleMode, repeat: RepeatMode) -> Self {
        Self {
            shuffle,
            repeat,
            ..Self::default()
        }
    }

    /// Add track to the front of the explicit queue (plays next)
    pub fn add_next(&mut self, track: Track) {
        self.explicit.push_front(track);
    }

    /// Add track to the end of the explicit queue
    pub fn add_to_end(&mut self, track: Track) {
        self.explicit.push_back(track);
    }

    /// Replace the source queue with a playlist/album
    ///
    /// Nothing from the new source is current until `jump_to`,
    /// `play_from_start` or `next_track` picks one.
    pub fn set_source(&mut self, tracks: Vec<Track>) {
        debug!(tracks = tracks.len(), shuffle = ?self.shuffle, "Loading queue source");
        self.original_source.clone_from(&tracks);
        self.source = tracks;
        shuffle_tracks(&mut self.source, self.shuffle);
        self.position = None;
        self.on_explicit = false;
    }

    /// Make the source track with `id` current
    ///
    /// Used when the user clicks a song row inside the playing collection.
    pub fn jump_to(&mut self, id: &str) -> Option<Track> {
        let index = self.source.iter().position(|t| t.id == id)?;
        self.position = Some(index);
        self.on_explicit = false;
        Some(self.source[index].clone())
    }

    /// Make the first source track current ("Play All")
    pub fn play_from_start(&mut self) -> Option<Track> {
        let first = self.source.first()?.clone();
        self.position = Some(0);
        self.on_explicit = false;
        Some(first)
    }

    /// Current source track, if one has been reached
    pub fn current_source(&self) -> Option<&Track> {
        self.position.and_then(|p| self.source.get(p))
    }

    /// First source index still ahead of the current one
    fn upcoming_source_start(&self) -> usize {
        self.position.map_or(0, |p| p + 1).min(self.source.len())
    }

    /// Tracks still to play: explicit queue, then the rest of the source
    pub fn upcoming(&self) -> Vec<&Track> {
        self.explicit
            .iter()
            .chain(self.source[self.upcoming_source_start()..].iter())
            .collect()
    }

    /// Number of upcoming tracks
    pub fn len(&self) -> usize {
        self.explicit.len() + self.source.len() - self.upcoming_source_start()
    }

    /// Check if nothing is left to play
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove an upcoming track by its index in `upcoming()`
    pub fn remove(&mut self, index: usize) -> Result<Track> {
        let explicit_len = self.explicit.len();
        if index < explicit_len {
            return self
                .explicit
                .remove(index)
                .ok_or(PlaybackError::IndexOutOfBounds(index));
        }

        let source_index = self.upcoming_source_start() + (index - explicit_len);
        if source_index >= self.source.len() {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }

        let track = self.source.remove(source_index);
        if let Some(pos) = self.original_source.iter().position(|t| t.id == track.id) {
            self.original_source.remove(pos);
        }
        Ok(track)
    }

    /// Move an upcoming track from `from` to `to` (indices into `upcoming()`)
    ///
    /// Tracks can only move within their own tier.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let total = self.len();
        if from >= total {
            return Err(PlaybackError::IndexOutOfBounds(from));
        }
        if to >= total {
            return Err(PlaybackError::IndexOutOfBounds(to));
        }
        if from == to {
            return Ok(());
        }

        let explicit_len = self.explicit.len();
        if from < explicit_len && to < explicit_len {
            if let Some(track) = self.explicit.remove(from) {
                self.explicit.insert(to, track);
            }
            Ok(())
        } else if from >= explicit_len && to >= explicit_len {
            let start = self.upcoming_source_start();
            let track = self.source.remove(start + (from - explicit_len));
            self.source.insert(start + (to - explicit_len), track);
            Ok(())
        } else {
            Err(PlaybackError::InvalidOperation(
                "Cannot move tracks between explicit and source queues".to_string(),
            ))
        }
    }

    /// Clear entire queue
    pub fn clear(&mut self) {
        self.explicit.clear();
        self.source.clear();
        self.original_source.clear();
        self.position = None;
        self.on_explicit = false;
    }

    /// Current shuffle mode
    pub fn shuffle(&self) -> ShuffleMode {
        self.shuffle
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Set repeat mode
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    /// Set shuffle mode
    ///
    /// Turning shuffle on keeps the current source track current and
    /// permutes everything else after it. Turning it off restores the
    /// original order and keeps the cursor on the current track.
    pub fn set_shuffle(&mut self, mode: ShuffleMode) {
        if self.shuffle == mode {
            return;
        }
        debug!(from = ?self.shuffle, to = ?mode, "Changing shuffle mode");
        self.shuffle = mode;

        let current_id = self.current_source().map(|t| t.id.clone());

        if mode == ShuffleMode::Off {
            self.source = self.original_source.clone();
            self.position = current_id
                .as_deref()
                .and_then(|id| self.source.iter().position(|t| t.id == id));
            return;
        }

        let mut rest: Vec<Track> = self.original_source.clone();
        let current = current_id
            .as_deref()
            .and_then(|id| rest.iter().position(|t| t.id == id))
            .map(|index| rest.remove(index));
        shuffle_tracks(&mut rest, mode);

        match current {
            Some(track) => {
                self.source = std::iter::once(track).chain(rest).collect();
                self.position = Some(0);
            }
            None => {
                self.source = rest;
                self.position = None;
            }
        }
    }

    /// Check if the source is currently in shuffled order
    pub fn is_shuffled(&self) -> bool {
        self.shuffle != ShuffleMode::Off
    }

    /// Restart the source for Repeat All, re-shuffling when shuffle is on
    fn wrap_to_start(&mut self) -> Option<Track> {
        self.source = self.original_source.clone();
        shuffle_tracks(&mut self.source, self.shuffle);
        self.play_from_start()
    }
}

impl TrackSequencer for Queue {
    fn next_track(&mut self, current: Option<&Track>) -> Option<Track> {
        if self.repeat == RepeatMode::One {
            if let Some(track) = current {
                return Some(track.clone());
            }
        }

        if let Some(track) = self.explicit.pop_front() {
            self.on_explicit = true;
            return Some(track);
        }

        let next = self.upcoming_source_start();
        if next < self.source.len() {
            self.position = Some(next);
            self.on_explicit = false;
            return Some(self.source[next].clone());
        }

        match self.repeat {
            RepeatMode::All => self.wrap_to_start(),
            RepeatMode::Off | RepeatMode::One => None,
        }
    }

    fn previous_track(&mut self, current: Option<&Track>) -> Option<Track> {
        if self.repeat == RepeatMode::One {
            if let Some(track) = current {
                return Some(track.clone());
            }
        }

        // Back from an explicit track lands on the source track it interrupted
        if self.on_explicit {
            self.on_explicit = false;
            if let Some(track) = self.current_source() {
                return Some(track.clone());
            }
        }

        match self.position {
            Some(p) if p > 0 => {
                self.position = Some(p - 1);
                Some(self.source[p - 1].clone())
            }
            Some(_) if self.repeat == RepeatMode::All && !self.source.is_empty() => {
                let last = self.source.len() - 1;
                self.position = Some(last);
                Some(self.source[last].clone())
            }
            _ => None,
        }
    }
}

//! Player - playback state holder
//!
//! Tracks the current track, the playing flag and progress, and exposes the
//! transitions the player bar drives. Ordering of tracks is delegated to a
//! `TrackSequencer`.
//!
//! Invariants held by every operation:
//! - progress is always within `[0, 100]`
//! - the player is never playing without a current track
//! - a track change resets progress to 0 and starts playing

use crate::{
    events::PlaybackEvent,
    sequencer::TrackSequencer,
    time::{clamp_percent, elapsed_secs, format_duration, format_time},
    types::{PlaybackStatus, PlayerConfig, Track},
};
use std::time::Duration;
use tracing::debug;

/// Playback state holder
#[derive(Debug, Clone)]
pub struct Player {
    current_track: Option<Track>,
    playing: bool,
    progress_percent: f64,

    /// "Previous" restarts the track once more than this many seconds played
    restart_threshold_secs: u32,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl Player {
    /// Create an idle player
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            current_track: None,
            playing: false,
            progress_percent: 0.0,
            restart_threshold_secs: config.restart_threshold_secs,
            pending_events: Vec::new(),
        }
    }

    /// Restore a page's initial player state without recording events
    ///
    /// Unlike `select_track`, this keeps the given progress and play flag.
    pub fn load(&mut self, track: Track, progress_percent: f64, playing: bool) {
        self.current_track = Some(track);
        self.progress_percent = clamp_percent(progress_percent);
        self.playing = playing;
    }

    // ===== Playback Control =====

    /// Make `track` current and start it from the beginning
    pub fn select_track(&mut self, track: Track) {
        debug!(track_id = %track.id, "Selecting track");

        let previous_track_id = self.current_track.as_ref().map(|t| t.id.clone());
        let track_id = track.id.clone();

        self.current_track = Some(track);
        self.progress_percent = 0.0;
        self.emit(PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
        self.set_playing(true);
    }

    /// Start or resume playback (no-op when idle)
    pub fn play(&mut self) -> PlaybackStatus {
        if self.current_track.is_some() {
            self.set_playing(true);
        }
        self.status()
    }

    /// Pause playback
    pub fn pause(&mut self) -> PlaybackStatus {
        self.set_playing(false);
        self.status()
    }

    /// Toggle between playing and paused (no-op when idle)
    pub fn toggle_play_pause(&mut self) -> PlaybackStatus {
        match self.status() {
            PlaybackStatus::Idle => PlaybackStatus::Idle,
            PlaybackStatus::Playing => self.pause(),
            PlaybackStatus::Paused => self.play(),
        }
    }

    /// Unload the current track
    pub fn stop(&mut self) {
        debug!("Stopping playback");
        let before = self.status();
        self.current_track = None;
        self.playing = false;
        self.progress_percent = 0.0;
        if before != PlaybackStatus::Idle {
            self.emit(PlaybackEvent::StateChanged {
                status: PlaybackStatus::Idle,
            });
        }
    }

    /// Seek to a progress percentage, clamped to `[0, 100]`
    ///
    /// Play/pause state is unchanged. Ignored when idle.
    pub fn seek(&mut self, percent: f64) {
        if self.current_track.is_none() {
            return;
        }
        self.progress_percent = clamp_percent(percent);
        self.emit(PlaybackEvent::ProgressChanged {
            progress_percent: self.progress_percent,
        });
    }

    /// Skip to the track the sequencer supplies
    ///
    /// Returns false (and changes nothing) if the sequencer has none.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self, sequencer: &mut dyn TrackSequencer) -> bool {
        match sequencer.next_track(self.current_track.as_ref()) {
            Some(track) => {
                self.select_track(track);
                true
            }
            None => {
                debug!("No next track");
                false
            }
        }
    }

    /// Go to the previous track
    ///
    /// Past the restart threshold, restarts the current track instead.
    /// With no previous track available, also restarts the current track.
    /// Returns false if nothing changed.
    pub fn previous(&mut self, sequencer: &mut dyn TrackSequencer) -> bool {
        if let Some(ref track) = self.current_track {
            let elapsed = elapsed_secs(self.progress_percent, track.duration_secs);
            if elapsed > u64::from(self.restart_threshold_secs) {
                self.restart();
                return true;
            }
        }

        if let Some(track) = sequencer.previous_track(self.current_track.as_ref()) {
            self.select_track(track);
            return true;
        }

        if self.current_track.is_some() && self.progress_percent > 0.0 {
            self.restart();
            return true;
        }

        false
    }

    /// Advance progress by `elapsed` wall time while playing
    ///
    /// When the track reaches the end, records `TrackFinished` and advances
    /// through the sequencer; with nothing next, playback pauses at 100%.
    /// Returns true if the track finished during this tick.
    pub fn tick(&mut self, elapsed: Duration, sequencer: &mut dyn TrackSequencer) -> bool {
        if self.status() != PlaybackStatus::Playing {
            return false;
        }
        let Some(ref track) = self.current_track else {
            return false;
        };

        let delta = if track.duration_secs == 0 {
            100.0
        } else {
            elapsed.as_secs_f64() / f64::from(track.duration_secs) * 100.0
        };
        let track_id = track.id.clone();

        self.progress_percent = clamp_percent(self.progress_percent + delta);
        self.emit(PlaybackEvent::ProgressChanged {
            progress_percent: self.progress_percent,
        });

        if self.progress_percent < 100.0 {
            return false;
        }

        debug!(track_id = %track_id, "Track finished");
        self.emit(PlaybackEvent::TrackFinished { track_id });
        if !self.next(sequencer) {
            self.set_playing(false);
        }
        true
    }

    fn restart(&mut self) {
        self.progress_percent = 0.0;
        self.emit(PlaybackEvent::ProgressChanged {
            progress_percent: 0.0,
        });
    }

    fn set_playing(&mut self, playing: bool) {
        let before = self.status();
        self.playing = playing && self.current_track.is_some();
        let after = self.status();
        if before != after {
            self.emit(PlaybackEvent::StateChanged { status: after });
        }
    }

    // ===== State Queries =====

    /// Current status derived from track + playing flag
    pub fn status(&self) -> PlaybackStatus {
        match (&self.current_track, self.playing) {
            (None, _) => PlaybackStatus::Idle,
            (Some(_), true) => PlaybackStatus::Playing,
            (Some(_), false) => PlaybackStatus::Paused,
        }
    }

    /// Get currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Check if playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Progress percentage (0-100)
    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    /// Elapsed label (`M:SS`), `0:00` when idle
    pub fn elapsed_label(&self) -> String {
        let duration = self.current_track.as_ref().map_or(0, |t| t.duration_secs);
        format_time(self.progress_percent, duration)
    }

    /// Total length label (`M:SS`), `0:00` when idle
    pub fn total_label(&self) -> String {
        format_duration(self.current_track.as_ref().map_or(0, |t| t.duration_secs))
    }

    // ===== Events =====

    /// Record an event produced by a collaborator (volume, queue)
    pub fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(&PlayerConfig::default())
    }
}

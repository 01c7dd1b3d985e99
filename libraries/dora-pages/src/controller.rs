//! Player controller
//!
//! One reusable owner of the player bar state. Every page embeds one and
//! forwards its UI callbacks here; the controller turns them into player,
//! volume and queue transitions and records the matching events.

use crate::error::Result;
use crate::preset::PagePreset;
use crate::view::PlayerBarView;
use dora_catalog::CatalogProvider;
use dora_playback::{
    PlaybackEvent, PlaybackStatus, Player, PlayerConfig, Queue, RepeatMode, ShuffleMode, Track,
    Volume,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Player bar state plus the callbacks wired to it
pub struct PlayerController {
    player: Player,
    volume: Volume,
    queue: Queue,
    catalog: Arc<dyn CatalogProvider>,

    /// Mode the shuffle button switches on
    preferred_shuffle: ShuffleMode,
}

impl PlayerController {
    /// Idle controller with the given volume
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: &PlayerConfig, volume: u8) -> Self {
        Self {
            player: Player::new(config),
            volume: Volume::new(volume).with_unmute_level(config.unmute_level),
            queue: Queue::with_modes(config.shuffle, config.repeat),
            catalog,
            preferred_shuffle: match config.shuffle {
                ShuffleMode::Off => ShuffleMode::Random,
                mode => mode,
            },
        }
    }

    /// Controller initialised from a page preset
    ///
    /// A preset track the catalog does not know is logged and skipped; the
    /// page then mounts idle.
    pub fn mount(
        catalog: Arc<dyn CatalogProvider>,
        config: &PlayerConfig,
        preset: &PagePreset,
    ) -> Self {
        let mut controller = Self::new(catalog, config, preset.volume);
        if let Some(ref id) = preset.track_id {
            match controller.catalog.track(id) {
                Ok(track) => controller.player.load(track, preset.progress, preset.playing),
                Err(err) => warn!(track_id = %id, "Preset track unavailable: {}", err),
            }
        }
        controller
    }

    // ===== UI Callbacks =====

    /// Play/pause button (no-op while idle)
    pub fn on_play_pause(&mut self) -> PlaybackStatus {
        self.player.toggle_play_pause()
    }

    /// Progress slider moved
    pub fn on_seek(&mut self, percent: f64) {
        self.player.seek(percent);
    }

    /// Volume slider moved
    pub fn on_volume_change(&mut self, percent: f64) {
        self.volume.set_percent(percent);
        self.emit_volume();
    }

    /// Mute button
    pub fn on_toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.emit_volume();
    }

    /// Next button
    pub fn on_next(&mut self) -> bool {
        self.player.next(&mut self.queue)
    }

    /// Previous button
    pub fn on_previous(&mut self) -> bool {
        self.player.previous(&mut self.queue)
    }

    /// A song row was clicked
    ///
    /// Songs in the current source keep the queue cursor in step, so
    /// next/previous continue from that row.
    ///
    /// # Errors
    /// Returns an error if the catalog has no track with this id
    pub fn on_play_song(&mut self, id: &str) -> Result<()> {
        let track = match self.queue.jump_to(id) {
            Some(track) => track,
            None => self.catalog.track(id)?,
        };
        debug!(track_id = %track.id, "Playing song");
        self.player.select_track(track);
        Ok(())
    }

    /// "Add to queue" on a song row
    ///
    /// # Errors
    /// Returns an error if the catalog has no track with this id
    pub fn on_add_to_queue(&mut self, id: &str) -> Result<()> {
        let track = match self.queue.upcoming().into_iter().find(|t| t.id == id) {
            Some(track) => track.clone(),
            None => self.catalog.track(id)?,
        };
        self.queue.add_to_end(track);
        self.emit_queue();
        Ok(())
    }

    /// Advance simulated playback by wall time
    pub fn on_tick(&mut self, elapsed: Duration) -> bool {
        self.player.tick(elapsed, &mut self.queue)
    }

    // ===== Queue =====

    /// Replace the queue source with a collection's tracks
    pub fn set_source(&mut self, tracks: Vec<Track>) {
        self.queue.set_source(tracks);
        self.emit_queue();
    }

    /// Start the source from its first track ("Play All")
    pub fn play_from_start(&mut self) -> bool {
        match self.queue.play_from_start() {
            Some(track) => {
                self.player.select_track(track);
                true
            }
            None => false,
        }
    }

    pub fn set_shuffle(&mut self, mode: ShuffleMode) {
        self.queue.set_shuffle(mode);
        self.emit_queue();
    }

    /// Shuffle button: off, or the configured shuffle mode
    pub fn toggle_shuffle(&mut self) -> ShuffleMode {
        let mode = if self.queue.is_shuffled() {
            ShuffleMode::Off
        } else {
            self.preferred_shuffle
        };
        self.set_shuffle(mode);
        mode
    }

    /// Repeat button: Off → All → One → Off
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        let mode = self.queue.repeat().cycle();
        self.queue.set_repeat(mode);
        mode
    }

    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.queue.set_repeat(mode);
    }

    // ===== Accessors =====

    /// Snapshot for rendering the player bar
    pub fn view(&self) -> PlayerBarView {
        PlayerBarView::build(&self.player, &self.volume, &self.queue)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn catalog(&self) -> &Arc<dyn CatalogProvider> {
        &self.catalog
    }

    /// Drain events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.player.drain_events()
    }

    fn emit_volume(&mut self) {
        self.player.emit(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit_queue(&mut self) {
        self.player.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}

impl std::fmt::Debug for PlayerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerController")
            .field("player", &self.player)
            .field("volume", &self.volume)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;
    use dora_catalog::{CatalogError, SampleCatalog};

    fn catalog() -> Arc<dyn CatalogProvider> {
        Arc::new(SampleCatalog::builtin())
    }

    fn home() -> PlayerController {
        PlayerController::mount(catalog(), &PlayerConfig::default(), &PagePreset::home())
    }

    #[test]
    fn mount_loads_preset_without_events() {
        let mut controller = home();
        let view = controller.view();

        assert_eq!(view.track.unwrap().id, "dora-1");
        assert_eq!(view.status, PlaybackStatus::Paused);
        assert_eq!(view.progress_percent, 30.0);
        assert_eq!(view.elapsed, "0:54");
        assert_eq!(view.total, "3:00");
        assert_eq!(view.volume, 70);
        assert!(controller.drain_events().is_empty());
    }

    #[test]
    fn mount_with_unknown_track_is_idle() {
        let preset = PagePreset {
            track_id: Some("ghost".to_string()),
            ..PagePreset::home()
        };
        let controller = PlayerController::mount(catalog(), &PlayerConfig::default(), &preset);
        assert_eq!(controller.view().status, PlaybackStatus::Idle);
    }

    #[test]
    fn mute_round_trip_restores_level() {
        let mut controller = home();

        controller.on_toggle_mute();
        assert_eq!(controller.view().effective_volume, 0);
        assert_eq!(controller.view().volume, 70);

        controller.on_toggle_mute();
        assert_eq!(controller.view().effective_volume, 70);
    }

    #[test]
    fn volume_to_zero_then_unmute_uses_configured_level() {
        let config = PlayerConfig {
            unmute_level: 35,
            ..PlayerConfig::default()
        };
        let mut controller = PlayerController::mount(catalog(), &config, &PagePreset::home());

        controller.on_volume_change(0.0);
        assert!(controller.view().is_muted);
        controller.on_toggle_mute();
        assert_eq!(controller.view().effective_volume, 35);

        let events = controller.drain_events();
        assert_eq!(
            events.last(),
            Some(&PlaybackEvent::VolumeChanged {
                level: 35,
                is_muted: false
            })
        );
    }

    #[test]
    fn play_song_from_source_continues_in_order() {
        let mut controller = home();
        let favs = controller.catalog().playlist("dora-favs").unwrap();
        controller.set_source(favs.tracks());

        controller.on_play_song("s2").unwrap();
        assert_eq!(controller.view().total, "4:05");

        assert!(controller.on_next());
        assert_eq!(controller.player().current_track().unwrap().id, "s3");
    }

    #[test]
    fn play_song_outside_source_uses_catalog() {
        let mut controller = home();
        controller.on_play_song("liked2").unwrap();

        let view = controller.view();
        assert_eq!(view.status, PlaybackStatus::Playing);
        assert_eq!(view.total, "3:15");
    }

    #[test]
    fn play_unknown_song_is_error() {
        let mut controller = home();
        let result = controller.on_play_song("nope");
        assert!(matches!(
            result,
            Err(PageError::Catalog(CatalogError::TrackNotFound(_)))
        ));
        assert_eq!(controller.player().current_track().unwrap().id, "dora-1");
    }

    #[test]
    fn add_to_queue_plays_next() {
        let mut controller = home();
        controller.on_add_to_queue("g1").unwrap();
        assert_eq!(controller.view().up_next, 1);

        assert!(controller.on_next());
        assert_eq!(controller.player().current_track().unwrap().id, "g1");
        assert!(!controller.on_next());
    }

    #[test]
    fn cycle_repeat_goes_through_all_modes() {
        let mut controller = home();
        assert_eq!(controller.cycle_repeat(), RepeatMode::All);
        assert_eq!(controller.cycle_repeat(), RepeatMode::One);
        assert_eq!(controller.cycle_repeat(), RepeatMode::Off);
    }

    #[test]
    fn toggle_shuffle_uses_configured_mode() {
        let config = PlayerConfig {
            shuffle: ShuffleMode::Smart,
            ..PlayerConfig::default()
        };
        let mut controller = PlayerController::mount(catalog(), &config, &PagePreset::home());
        assert_eq!(controller.toggle_shuffle(), ShuffleMode::Off);
        assert_eq!(controller.toggle_shuffle(), ShuffleMode::Smart);

        let mut plain = home();
        assert_eq!(plain.toggle_shuffle(), ShuffleMode::Random);
    }

    #[test]
    fn previous_on_preset_restarts_track() {
        let mut controller = home();
        // 30% of 180s is well past the restart threshold
        assert!(controller.on_previous());
        assert_eq!(controller.view().progress_percent, 0.0);
        assert_eq!(controller.player().current_track().unwrap().id, "dora-1");
    }
}

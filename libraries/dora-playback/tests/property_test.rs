//! Property-based tests for the player state
//!
//! Uses proptest to verify invariants across many random inputs.

use dora_playback::{
    format_time, NoSequencer, PlaybackStatus, Player, Queue, RepeatMode, ShuffleMode, Track,
    Volume,
};
use proptest::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use std::time::Duration;

// ===== Helpers =====

fn arbitrary_track() -> impl Strategy<Value = Track> {
    (
        "[a-z0-9]{1,10}",  // id
        "[A-Za-z ]{1,30}", // title
        "[A-Za-z ]{1,20}", // artist
        0u32..900,         // duration
    )
        .prop_map(|(id, title, artist, duration)| Track::new(id, title, artist, "", duration))
}

fn distinct_tracks() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::vec(arbitrary_track(), 1..30).prop_map(|tracks| {
        tracks
            .into_iter()
            .enumerate()
            .map(|(i, mut t)| {
                t.id = format!("{}-{}", t.id, i);
                t
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Op {
    Select(Track),
    Toggle,
    Play,
    Pause,
    Stop,
    Seek(f64),
    Next,
    Previous,
    Tick(u64),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_track().prop_map(Op::Select),
        Just(Op::Toggle),
        Just(Op::Play),
        Just(Op::Pause),
        Just(Op::Stop),
        (-200.0f64..300.0).prop_map(Op::Seek),
        Just(Op::Next),
        Just(Op::Previous),
        (0u64..400).prop_map(Op::Tick),
    ]
}

// ===== Property Tests =====

proptest! {
    /// Property: labels are always M:SS
    #[test]
    fn format_time_matches_pattern(percent in 0.0f64..=100.0, duration in 0u32..100_000) {
        let pattern = Regex::new(r"^\d+:\d{2}$").unwrap();
        let label = format_time(percent, duration);
        prop_assert!(pattern.is_match(&label), "bad label {}", label);
    }

    /// Property: zero progress is always 0:00
    #[test]
    fn zero_progress_formats_as_zero(duration in 0u32..100_000) {
        prop_assert_eq!(format_time(0.0, duration), "0:00");
    }

    /// Property: set_volume couples the mute flag to level == 0
    #[test]
    fn set_volume_mutes_exactly_at_zero(start in 0u8..=100, level in 0u8..=100) {
        let mut volume = Volume::new(start);
        volume.set_level(level);
        prop_assert_eq!(volume.is_muted(), level == 0);
        prop_assert_eq!(volume.level(), level);
    }

    /// Property: toggling mute twice from an audible level restores everything
    #[test]
    fn toggle_mute_twice_restores(level in 1u8..=100, pre_muted in any::<bool>()) {
        let mut volume = Volume::new(level);
        if pre_muted {
            volume.mute();
        }
        let before = volume.clone();

        volume.toggle_mute();
        prop_assert_ne!(volume.is_muted(), before.is_muted());
        volume.toggle_mute();

        prop_assert_eq!(volume, before);
    }

    /// Property: effective volume is zero exactly when muted
    #[test]
    fn effective_volume_gated_by_mute(level in 0u8..=100, mute in any::<bool>()) {
        let mut volume = Volume::new(level);
        if mute {
            volume.mute();
        }
        let expected = if volume.is_muted() { 0 } else { volume.level() };
        prop_assert_eq!(volume.effective_level(), expected);
    }

    /// Property: any op sequence keeps progress in range and never plays without a track
    #[test]
    fn player_invariants_hold(
        tracks in distinct_tracks(),
        ops in prop::collection::vec(arbitrary_op(), 1..60)
    ) {
        let mut queue = Queue::new();
        queue.set_source(tracks);
        let mut player = Player::default();

        for op in ops {
            match op {
                Op::Select(track) => player.select_track(track),
                Op::Toggle => { player.toggle_play_pause(); }
                Op::Play => { player.play(); }
                Op::Pause => { player.pause(); }
                Op::Stop => player.stop(),
                Op::Seek(p) => player.seek(p),
                Op::Next => { player.next(&mut queue); }
                Op::Previous => { player.previous(&mut queue); }
                Op::Tick(secs) => { player.tick(Duration::from_secs(secs), &mut queue); }
            }

            let progress = player.progress_percent();
            prop_assert!((0.0..=100.0).contains(&progress), "progress {}", progress);
            if player.current_track().is_none() {
                prop_assert!(!player.is_playing());
                prop_assert_eq!(player.status(), PlaybackStatus::Idle);
            }
        }
    }

    /// Property: select_track always resets to Playing at 0
    #[test]
    fn select_track_resets(
        first in arbitrary_track(),
        second in arbitrary_track(),
        seek in 0.0f64..=100.0
    ) {
        let mut player = Player::default();
        player.select_track(first);
        player.seek(seek);
        player.pause();

        player.select_track(second);
        prop_assert_eq!(player.status(), PlaybackStatus::Playing);
        prop_assert_eq!(player.progress_percent(), 0.0);
    }

    /// Property: seek clamps to [0, 100] and leaves play state alone
    #[test]
    fn seek_clamps(track in arbitrary_track(), percent in -1000.0f64..1000.0, pause in any::<bool>()) {
        let mut player = Player::default();
        player.select_track(track);
        if pause {
            player.pause();
        }
        let status = player.status();

        player.seek(percent);

        prop_assert_eq!(player.progress_percent(), percent.clamp(0.0, 100.0));
        prop_assert_eq!(player.status(), status);
    }

    /// Property: a full pass plays every source track exactly once, shuffled or not
    #[test]
    fn queue_pass_visits_every_track_once(tracks in distinct_tracks(), shuffle in 0u8..3) {
        let mode = match shuffle {
            0 => ShuffleMode::Off,
            1 => ShuffleMode::Random,
            _ => ShuffleMode::Smart,
        };
        let mut queue = Queue::with_modes(mode, RepeatMode::Off);
        queue.set_source(tracks.clone());
        let mut player = Player::default();

        let mut seen = HashSet::new();
        while player.next(&mut queue) {
            let id = player.current_track().unwrap().id.clone();
            prop_assert!(seen.insert(id), "track played twice in one pass");
        }

        prop_assert_eq!(seen.len(), tracks.len());
    }

    /// Property: tick never overshoots and a track with nothing after it stops at 100%
    #[test]
    fn tick_never_overshoots(duration in 1u32..600, steps in prop::collection::vec(0u64..120, 1..30)) {
        let mut player = Player::default();
        player.select_track(Track::new("t", "T", "A", "", duration));

        for secs in steps {
            player.tick(Duration::from_secs(secs), &mut NoSequencer);
            prop_assert!(player.progress_percent() <= 100.0);
        }
        if player.progress_percent() >= 100.0 {
            prop_assert_eq!(player.status(), PlaybackStatus::Paused);
        }
    }
}

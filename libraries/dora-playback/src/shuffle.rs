//! Shuffle algorithms for queue randomization
//!
//! Implements both pure random (Fisher-Yates) and smart shuffle algorithms

use crate::types::{ShuffleMode, Track};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::collections::HashMap;

/// Shuffle a list of tracks in place
pub fn shuffle_tracks(tracks: &mut [Track], mode: ShuffleMode) {
    match mode {
        ShuffleMode::Off => {}
        ShuffleMode::Random => shuffle_random(tracks),
        ShuffleMode::Smart => shuffle_smart(tracks),
    }
}

/// Pure random shuffle using Fisher-Yates algorithm
fn shuffle_random(tracks: &mut [Track]) {
    let mut rng = thread_rng();
    tracks.shuffle(&mut rng);
}

/// Smart shuffle: spread each artist's tracks apart
///
/// 1. Group tracks by artist, shuffle within each group
/// 2. Shuffle the artist order
/// 3. Deal round-robin from the groups
fn shuffle_smart(tracks: &mut [Track]) {
    if tracks.len() <= 2 {
        shuffle_random(tracks);
        return;
    }

    let mut rng = thread_rng();

    let mut by_artist: HashMap<&str, Vec<Track>> = HashMap::new();
    for track in tracks.iter() {
        by_artist
            .entry(track.artist.as_str())
            .or_default()
            .push(track.clone());
    }

    let mut groups: Vec<Vec<Track>> = by_artist.into_values().collect();
    for group in &mut groups {
        group.shuffle(&mut rng);
    }
    groups.shuffle(&mut rng);

    let mut result = Vec::with_capacity(tracks.len());
    let mut round = 0;
    while result.len() < tracks.len() {
        for group in &groups {
            if let Some(track) = group.get(round) {
                result.push(track.clone());
            }
        }
        round += 1;
    }

    for (slot, track) in tracks.iter_mut().zip(result) {
        *slot = track;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn track(id: &str, artist: &str) -> Track {
        Track::new(id, format!("Song {id}"), artist, "", 180)
    }

    fn ids(tracks: &[Track]) -> Vec<String> {
        tracks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn shuffle_mode_off_no_change() {
        let mut tracks = vec![track("1", "A"), track("2", "B"), track("3", "C")];
        let original = ids(&tracks);

        shuffle_tracks(&mut tracks, ShuffleMode::Off);

        assert_eq!(ids(&tracks), original);
    }

    #[test]
    fn random_shuffle_preserves_all_tracks() {
        let mut tracks: Vec<Track> = (0..10).map(|i| track(&i.to_string(), "A")).collect();

        shuffle_tracks(&mut tracks, ShuffleMode::Random);

        let unique: HashSet<String> = ids(&tracks).into_iter().collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn smart_shuffle_alternates_two_balanced_artists() {
        let mut tracks = vec![
            track("1a", "Perfume"),
            track("1b", "Perfume"),
            track("1c", "Perfume"),
            track("2a", "mao"),
            track("2b", "mao"),
            track("2c", "mao"),
        ];

        shuffle_tracks(&mut tracks, ShuffleMode::Smart);

        // Round-robin over two equal groups never repeats an artist
        for pair in tracks.windows(2) {
            assert_ne!(pair[0].artist, pair[1].artist);
        }
    }

    #[test]
    fn smart_shuffle_preserves_all_tracks() {
        let mut tracks = vec![
            track("1", "A"),
            track("2", "A"),
            track("3", "B"),
            track("4", "B"),
            track("5", "C"),
        ];

        shuffle_tracks(&mut tracks, ShuffleMode::Smart);

        let unique: HashSet<String> = ids(&tracks).into_iter().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn smart_shuffle_with_single_artist() {
        let mut tracks = vec![track("1", "A"), track("2", "A"), track("3", "A")];
        shuffle_tracks(&mut tracks, ShuffleMode::Smart);
        assert_eq!(tracks.len(), 3);
    }

    #[test]
    fn smart_shuffle_small_inputs() {
        let mut empty: Vec<Track> = vec![];
        shuffle_tracks(&mut empty, ShuffleMode::Smart);
        assert!(empty.is_empty());

        let mut single = vec![track("1", "A")];
        shuffle_tracks(&mut single, ShuffleMode::Smart);
        assert_eq!(single[0].id, "1");
    }
}

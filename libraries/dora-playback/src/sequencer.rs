//! Track ordering seam
//!
//! The player never decides what comes next; it asks a sequencer.
//! `Queue` is the in-crate implementation, pages may supply their own.

use crate::types::Track;

/// Supplies the next/previous track for skip and auto-advance
pub trait TrackSequencer {
    /// Track to play after `current`, or `None` at the end of the order
    fn next_track(&mut self, current: Option<&Track>) -> Option<Track>;

    /// Track to play before `current`, or `None` at the start of the order
    fn previous_track(&mut self, current: Option<&Track>) -> Option<Track>;
}

/// Sequencer with nothing to play
///
/// Matches pages whose skip buttons have no ordering behind them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSequencer;

impl TrackSequencer for NoSequencer {
    fn next_track(&mut self, _current: Option<&Track>) -> Option<Track> {
        None
    }

    fn previous_track(&mut self, _current: Option<&Track>) -> Option<Track> {
        None
    }
}

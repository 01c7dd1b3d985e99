//! UI events
//!
//! The callbacks a page can receive, with a compact text form
//! (`seek=50`, `play=s1`) used by scripted sessions.

use crate::error::PageError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    PlayPause,
    Next,
    Previous,
    ToggleMute,
    Seek(f64),
    Volume(f64),
    PlaySong(String),
    AddToQueue(String),
    /// Simulated wall time passing
    Tick(Duration),
    Shuffle,
    Repeat,
    /// Now Playing heart button
    Like,
    /// Playlist "Play" button
    PlayAll,
    /// Search box input
    Search(String),
    /// Tab switch on Library or Search
    Tab(String),
}

fn number(key: &str, value: &str) -> Result<f64, PageError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| PageError::InvalidEvent(format!("{key}: '{value}' is not a number")))
}

fn non_empty(key: &str, value: &str) -> Result<String, PageError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PageError::InvalidEvent(format!("{key}: missing id")));
    }
    Ok(value.to_string())
}

impl FromStr for UiEvent {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = match s.split_once('=') {
            Some((key, value)) => (key.trim(), Some(value)),
            None => (s.trim(), None),
        };

        let event = match (key, value) {
            ("play-pause", None) => Self::PlayPause,
            ("next", None) => Self::Next,
            ("previous" | "prev", None) => Self::Previous,
            ("mute", None) => Self::ToggleMute,
            ("shuffle", None) => Self::Shuffle,
            ("repeat", None) => Self::Repeat,
            ("like", None) => Self::Like,
            ("play-all", None) => Self::PlayAll,
            ("seek", Some(v)) => Self::Seek(number(key, v)?),
            ("volume", Some(v)) => Self::Volume(number(key, v)?),
            ("tick", Some(v)) => {
                let secs = number(key, v)?;
                if secs < 0.0 {
                    return Err(PageError::InvalidEvent(format!("tick: '{v}' is negative")));
                }
                let elapsed = Duration::try_from_secs_f64(secs)
                    .map_err(|_| PageError::InvalidEvent(format!("tick: '{v}' is out of range")))?;
                Self::Tick(elapsed)
            }
            ("play", Some(v)) => Self::PlaySong(non_empty(key, v)?),
            ("queue", Some(v)) => Self::AddToQueue(non_empty(key, v)?),
            ("tab", Some(v)) => Self::Tab(non_empty(key, v)?),
            // Search terms keep their spacing; empty clears the search
            ("search", Some(v)) => Self::Search(v.to_string()),
            _ => return Err(PageError::InvalidEvent(s.to_string())),
        };
        Ok(event)
    }
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayPause => f.write_str("play-pause"),
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("previous"),
            Self::ToggleMute => f.write_str("mute"),
            Self::Shuffle => f.write_str("shuffle"),
            Self::Repeat => f.write_str("repeat"),
            Self::Like => f.write_str("like"),
            Self::PlayAll => f.write_str("play-all"),
            Self::Seek(p) => write!(f, "seek={p}"),
            Self::Volume(p) => write!(f, "volume={p}"),
            Self::Tick(d) => write!(f, "tick={}", d.as_secs_f64()),
            Self::PlaySong(id) => write!(f, "play={id}"),
            Self::AddToQueue(id) => write!(f, "queue={id}"),
            Self::Search(term) => write!(f, "search={term}"),
            Self::Tab(tab) => write!(f, "tab={tab}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_events() {
        assert_eq!("play-pause".parse::<UiEvent>().unwrap(), UiEvent::PlayPause);
        assert_eq!("prev".parse::<UiEvent>().unwrap(), UiEvent::Previous);
        assert_eq!("mute".parse::<UiEvent>().unwrap(), UiEvent::ToggleMute);
    }

    #[test]
    fn parses_valued_events() {
        assert_eq!("seek=50".parse::<UiEvent>().unwrap(), UiEvent::Seek(50.0));
        assert_eq!("volume=0".parse::<UiEvent>().unwrap(), UiEvent::Volume(0.0));
        assert_eq!(
            "tick=2.5".parse::<UiEvent>().unwrap(),
            UiEvent::Tick(Duration::from_millis(2500))
        );
        assert_eq!(
            "play=s1".parse::<UiEvent>().unwrap(),
            UiEvent::PlaySong("s1".to_string())
        );
        assert_eq!(
            "search=doraemon no".parse::<UiEvent>().unwrap(),
            UiEvent::Search("doraemon no".to_string())
        );
    }

    #[test]
    fn rejects_bad_events() {
        let bad_events = [
            "dance", "seek", "seek=abc", "seek=NaN", "tick=-1", "tick=1e20", "play=", "next=1",
        ];
        for bad in bad_events {
            assert!(
                matches!(bad.parse::<UiEvent>(), Err(PageError::InvalidEvent(_))),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn display_parses_back() {
        let events = [
            UiEvent::Seek(12.5),
            UiEvent::AddToQueue("g1".to_string()),
            UiEvent::PlayAll,
            UiEvent::Tab("songs".to_string()),
        ];
        for event in events {
            assert_eq!(event.to_string().parse::<UiEvent>().unwrap(), event);
        }
    }
}

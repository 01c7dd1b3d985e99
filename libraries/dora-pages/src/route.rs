//! Path routing

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed application route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "id", rename_all = "snake_case")]
pub enum Route {
    Home,
    Search,
    Library,
    NowPlaying,
    Playlist(String),
    Artist(String),
    NotFound(String),
}

impl Route {
    /// Parse a location path
    ///
    /// Query strings, fragments and a trailing slash are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["search"] => Self::Search,
            ["library"] => Self::Library,
            ["now-playing"] => Self::NowPlaying,
            ["playlist", id] => Self::Playlist((*id).to_string()),
            ["artist", id] => Self::Artist((*id).to_string()),
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Search => "/search".to_string(),
            Self::Library => "/library".to_string(),
            Self::NowPlaying => "/now-playing".to_string(),
            Self::Playlist(id) => format!("/playlist/{id}"),
            Self::Artist(id) => format!("/artist/{id}"),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

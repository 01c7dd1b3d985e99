use super::{Page, PageContext, PageView};
use crate::controller::PlayerController;
use crate::error::{PageError, Result};
use crate::nav::{navigation_menu, NavItem};
use crate::route::Route;
use crate::ui_event::UiEvent;
use crate::view::{cards, song_rows, CardView, PlayerBarView, SongRowView};
use dora_catalog::LibraryCollections;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Library tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTab {
    #[default]
    Playlists,
    /// Liked songs
    Songs,
    Albums,
    Artists,
}

impl FromStr for LibraryTab {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "playlists" => Ok(Self::Playlists),
            "songs" | "liked" | "liked-songs" => Ok(Self::Songs),
            "albums" => Ok(Self::Albums),
            "artists" => Ok(Self::Artists),
            other => Err(PageError::InvalidEvent(format!("unknown library tab '{other}'"))),
        }
    }
}

/// Library page: the user's playlists, liked songs and albums
#[derive(Debug)]
pub struct LibraryPage {
    controller: PlayerController,
    collections: LibraryCollections,
    tab: LibraryTab,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryView {
    pub nav: Vec<NavItem>,
    pub tab: LibraryTab,
    pub playlists: Vec<CardView>,
    pub liked_songs: Vec<SongRowView>,
    pub albums: Vec<CardView>,
    pub artists: Vec<CardView>,
    pub player: PlayerBarView,
}

impl LibraryPage {
    /// Mount with liked songs as the queue source
    pub fn mount(ctx: &PageContext) -> Self {
        let collections = ctx.catalog.library();
        let mut controller =
            PlayerController::mount(ctx.catalog.clone(), &ctx.player, &ctx.presets.library);
        controller.set_source(collections.liked_songs.iter().map(|s| s.to_track(None)).collect());
        controller.drain_events();

        Self {
            controller,
            collections,
            tab: LibraryTab::default(),
        }
    }

    pub fn tab(&self) -> LibraryTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: LibraryTab) {
        self.tab = tab;
    }

    pub fn view(&self) -> LibraryView {
        LibraryView {
            nav: navigation_menu(&self.route().path()),
            tab: self.tab,
            playlists: cards(&self.collections.playlists),
            liked_songs: song_rows(&self.collections.liked_songs, self.controller.player(), None),
            albums: cards(&self.collections.albums),
            artists: cards(&self.collections.artists),
            player: self.controller.view(),
        }
    }
}

impl Page for LibraryPage {
    fn route(&self) -> Route {
        Route::Library
    }

    fn controller(&self) -> &PlayerController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut PlayerController {
        &mut self.controller
    }

    fn render(&self) -> PageView {
        PageView::Library(self.view())
    }

    fn handle_page_event(&mut self, event: &UiEvent) -> Result<bool> {
        match event {
            UiEvent::Tab(name) => {
                self.select_tab(name.parse()?);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dora_catalog::SampleCatalog;
    use std::sync::Arc;

    fn page() -> LibraryPage {
        LibraryPage::mount(&PageContext::new(Arc::new(SampleCatalog::builtin())))
    }

    #[test]
    fn mounts_on_playlists_tab() {
        let mut page = page();
        let view = page.view();

        assert_eq!(view.tab, LibraryTab::Playlists);
        assert_eq!(view.playlists.len(), 2);
        assert_eq!(view.liked_songs.len(), 2);
        assert_eq!(view.player.elapsed, "1:35");
        assert!(page.controller_mut().drain_events().is_empty());
    }

    #[test]
    fn liked_songs_play_in_order() {
        let mut page = page();
        page.handle(&UiEvent::Tab("songs".to_string())).unwrap();
        page.handle(&UiEvent::PlaySong("liked1".to_string())).unwrap();
        page.handle(&UiEvent::Next).unwrap();

        let view = page.view();
        assert_eq!(view.tab, LibraryTab::Songs);
        assert!(view.liked_songs[1].is_playing);
        assert_eq!(view.player.total, "3:15");
    }

    #[test]
    fn unknown_tab_is_rejected() {
        let mut page = page();
        assert!(page.handle(&UiEvent::Tab("podcasts".to_string())).is_err());
        assert_eq!(page.tab(), LibraryTab::Playlists);
    }
}

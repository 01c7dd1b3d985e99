use super::{Page, PageContext, PageView};
use crate::controller::PlayerController;
use crate::error::{PageError, Result};
use crate::nav::{navigation_menu, NavItem};
use crate::route::Route;
use crate::ui_event::UiEvent;
use crate::view::{cards, song_rows, CardView, PlayerBarView, SongRowView};
use dora_catalog::SearchResults;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Search result tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTab {
    #[default]
    Songs,
    Artists,
    Albums,
    Playlists,
}

impl FromStr for SearchTab {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "songs" => Ok(Self::Songs),
            "artists" => Ok(Self::Artists),
            "albums" => Ok(Self::Albums),
            "playlists" => Ok(Self::Playlists),
            other => Err(PageError::InvalidEvent(format!("unknown search tab '{other}'"))),
        }
    }
}

/// Search page
#[derive(Debug)]
pub struct SearchPage {
    controller: PlayerController,
    search_term: String,
    tab: SearchTab,
    results: SearchResults,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub nav: Vec<NavItem>,
    pub search_term: String,

    /// False shows the "browse" prompt instead of result tabs
    pub has_query: bool,
    pub tab: SearchTab,
    pub songs: Vec<SongRowView>,
    pub artists: Vec<CardView>,
    pub albums: Vec<CardView>,
    pub playlists: Vec<CardView>,
    pub player: PlayerBarView,
}

impl SearchPage {
    pub fn mount(ctx: &PageContext) -> Self {
        let controller =
            PlayerController::mount(ctx.catalog.clone(), &ctx.player, &ctx.presets.search);
        Self {
            controller,
            search_term: String::new(),
            tab: SearchTab::default(),
            results: SearchResults::default(),
        }
    }

    /// Update the search box, re-running the search
    ///
    /// Matching songs become the queue source so next/previous walk the
    /// result list.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.results = self.controller.catalog().search(term);
        debug!(term, hits = self.results.total(), "Search updated");

        let tracks = self.results.songs.iter().map(|s| s.to_track(None)).collect();
        self.controller.set_source(tracks);
    }

    pub fn select_tab(&mut self, tab: SearchTab) {
        self.tab = tab;
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn view(&self) -> SearchView {
        SearchView {
            nav: navigation_menu(&self.route().path()),
            search_term: self.search_term.clone(),
            has_query: !self.search_term.trim().is_empty(),
            tab: self.tab,
            songs: song_rows(&self.results.songs, self.controller.player(), None),
            artists: cards(&self.results.artists),
            albums: cards(&self.results.albums),
            playlists: cards(&self.results.playlists),
            player: self.controller.view(),
        }
    }
}

impl Page for SearchPage {
    fn route(&self) -> Route {
        Route::Search
    }

    fn controller(&self) -> &PlayerController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut PlayerController {
        &mut self.controller
    }

    fn render(&self) -> PageView {
        PageView::Search(self.view())
    }

    fn handle_page_event(&mut self, event: &UiEvent) -> Result<bool> {
        match event {
            UiEvent::Search(term) => {
                self.set_search_term(term);
                Ok(true)
            }
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

    fn page() -> SearchPage {
        SearchPage::mount(&PageContext::new(Arc::new(SampleCatalog::builtin())))
    }

    #[test]
    fn empty_search_shows_prompt() {
        let view = page().view();
        assert!(!view.has_query);
        assert!(view.songs.is_empty());
        assert_eq!(view.player.elapsed, "0:20");
        assert_eq!(view.player.volume, 60);
    }

    #[test]
    fn playing_a_result_uses_its_duration() {
        let mut page = page();
        page.handle(&UiEvent::Search("doraemon".to_string())).unwrap();
        assert!(page.view().has_query);

        page.handle(&UiEvent::PlaySong("s2".to_string())).unwrap();

        let view = page.view();
        assert_eq!(view.player.total, "4:05");
        assert!(view.songs.iter().any(|row| row.song.id == "s2" && row.is_playing));
    }

    #[test]
    fn switching_tabs() {
        let mut page = page();
        page.handle(&UiEvent::Tab("artists".to_string())).unwrap();
        assert_eq!(page.view().tab, SearchTab::Artists);
        assert!(page.handle(&UiEvent::Tab("videos".to_string())).is_err());
    }

    #[test]
    fn clearing_search_empties_results() {
        let mut page = page();
        page.set_search_term("perfume");
        assert!(!page.results().is_empty());

        page.set_search_term("");
        assert!(page.results().is_empty());
        assert_eq!(page.controller().queue().len(), 0);
    }
}

//! Pages
//!
//! Each page owns a [`PlayerController`] plus its own page state, and
//! renders into a [`PageView`]. [`mount`] picks the page for a route.

mod home;
mod library;
mod now_playing;
mod playlist;
mod search;

pub use home::{HomePage, HomeView};
pub use library::{LibraryPage, LibraryTab, LibraryView};
pub use now_playing::{NowPlayingPage, NowPlayingView};
pub use playlist::{PlaylistHeader, PlaylistPage, PlaylistView};
pub use search::{SearchPage, SearchTab, SearchView};

use crate::controller::PlayerController;
use crate::error::{PageError, Result};
use crate::preset::PagePresets;
use crate::route::Route;
use crate::ui_event::UiEvent;
use dora_catalog::CatalogProvider;
use dora_playback::{PlaybackStatus, PlayerConfig};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Shared inputs for mounting pages
#[derive(Clone)]
pub struct PageContext {
    pub catalog: Arc<dyn CatalogProvider>,
    pub player: PlayerConfig,
    pub presets: PagePresets,
}

impl PageContext {
    /// Context with default player settings and presets
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            catalog,
            player: PlayerConfig::default(),
            presets: PagePresets::default(),
        }
    }
}

/// Rendered page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Library(LibraryView),
    NowPlaying(NowPlayingView),
    Search(SearchView),
    Playlist(PlaylistView),
}

/// A mounted page
pub trait Page {
    fn route(&self) -> Route;

    fn controller(&self) -> &PlayerController;

    fn controller_mut(&mut self) -> &mut PlayerController;

    fn render(&self) -> PageView;

    /// Play/pause button
    fn on_play_pause(&mut self) -> PlaybackStatus {
        self.controller_mut().on_play_pause()
    }

    /// Handle an event only some pages understand
    ///
    /// Returns `Ok(false)` if this page does not support it.
    fn handle_page_event(&mut self, _event: &UiEvent) -> Result<bool> {
        Ok(false)
    }

    /// Dispatch a UI event
    ///
    /// # Errors
    /// Returns an error for unknown song ids and for events this page does
    /// not support
    fn handle(&mut self, event: &UiEvent) -> Result<()> {
        dispatch(self, event)
    }
}

/// Route a UI event to the controller, or to the page for page-only events
///
/// This is the default [`Page::handle`]; pages that override `handle` call
/// it for the shared behaviour.
///
/// # Errors
/// As [`Page::handle`]
pub fn dispatch<P: Page + ?Sized>(page: &mut P, event: &UiEvent) -> Result<()> {
    debug!(route = %page.route(), %event, "UI event");
    match event {
        UiEvent::PlayPause => {
            page.on_play_pause();
        }
        UiEvent::Next => {
            page.controller_mut().on_next();
        }
        UiEvent::Previous => {
            page.controller_mut().on_previous();
        }
        UiEvent::ToggleMute => page.controller_mut().on_toggle_mute(),
        UiEvent::Seek(percent) => page.controller_mut().on_seek(*percent),
        UiEvent::Volume(percent) => page.controller_mut().on_volume_change(*percent),
        UiEvent::PlaySong(id) => page.controller_mut().on_play_song(id)?,
        UiEvent::AddToQueue(id) => page.controller_mut().on_add_to_queue(id)?,
        UiEvent::Tick(elapsed) => {
            page.controller_mut().on_tick(*elapsed);
        }
        UiEvent::Shuffle => {
            page.controller_mut().toggle_shuffle();
        }
        UiEvent::Repeat => {
            page.controller_mut().cycle_repeat();
        }
        other => {
            if !page.handle_page_event(other)? {
                return Err(PageError::InvalidEvent(format!(
                    "{other} is not supported on {}",
                    page.route()
                )));
            }
        }
    }
    Ok(())
}

/// Mount the page for `route`
///
/// # Errors
/// Returns `PageError::UnknownRoute` for routes without a page
pub fn mount(route: &Route, ctx: &PageContext) -> Result<Box<dyn Page>> {
    debug!(%route, "Mounting page");
    let page: Box<dyn Page> = match route {
        Route::Home => Box::new(HomePage::mount(ctx)),
        Route::Library => Box::new(LibraryPage::mount(ctx)),
        Route::NowPlaying => Box::new(NowPlayingPage::mount(ctx)),
        Route::Search => Box::new(SearchPage::mount(ctx)),
        Route::Playlist(id) => Box::new(PlaylistPage::mount(ctx, id)?),
        Route::Artist(_) | Route::NotFound(_) => {
            return Err(PageError::UnknownRoute(route.path()));
        }
    };
    Ok(page)
}

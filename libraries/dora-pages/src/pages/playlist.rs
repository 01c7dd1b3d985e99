use super::{Page, PageContext, PageView};
use crate::controller::PlayerController;
use crate::error::Result;
use crate::nav::{navigation_menu, NavItem};
use crate::route::Route;
use crate::ui_event::UiEvent;
use crate::view::{song_rows, PlayerBarView, SongRowView};
use dora_catalog::{artwork_or_placeholder, CollectionKind, PlaylistDetails};
use dora_playback::{format_duration, PlaybackStatus};
use serde::Serialize;

/// Playlist or album detail page
#[derive(Debug)]
pub struct PlaylistPage {
    controller: PlayerController,

    /// Id from the route, which may differ from the shown collection
    requested_id: String,
    details: PlaylistDetails,
}

/// Collection header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistHeader {
    pub id: String,
    pub name: String,
    pub description: String,
    pub creator: String,
    pub image_url: String,
    pub kind: CollectionKind,
    pub song_count: usize,
    pub total_duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaylistView {
    pub nav: Vec<NavItem>,
    pub requested_id: String,
    pub playlist: PlaylistHeader,
    pub songs: Vec<SongRowView>,
    pub player: PlayerBarView,
}

impl PlaylistPage {
    /// Mount for collection `id`, showing the default one if `id` is unknown
    ///
    /// # Errors
    /// Returns an error only if the catalog lacks its default collection
    pub fn mount(ctx: &PageContext, id: &str) -> Result<Self> {
        let details = ctx.catalog.playlist_or_default(id)?;
        let mut controller =
            PlayerController::mount(ctx.catalog.clone(), &ctx.player, &ctx.presets.playlist);
        controller.set_source(details.tracks());
        controller.drain_events();

        Ok(Self {
            controller,
            requested_id: id.to_string(),
            details,
        })
    }

    pub fn details(&self) -> &PlaylistDetails {
        &self.details
    }

    /// "Play" button: start from the first song
    pub fn play_all(&mut self) -> bool {
        self.controller.play_from_start()
    }

    pub fn view(&self) -> PlaylistView {
        let details = &self.details;
        PlaylistView {
            nav: navigation_menu(&self.route().path()),
            requested_id: self.requested_id.clone(),
            playlist: PlaylistHeader {
                id: details.id.clone(),
                name: details.name.clone(),
                description: details.description.clone(),
                creator: details.creator.clone(),
                image_url: artwork_or_placeholder([Some(details.image_url.as_str())]),
                kind: details.kind,
                song_count: details.songs.len(),
                total_duration: format_duration(details.total_duration_secs()),
            },
            songs: song_rows(
                &details.songs,
                self.controller.player(),
                Some(&details.image_url),
            ),
            player: self.controller.view(),
        }
    }
}

impl Page for PlaylistPage {
    fn route(&self) -> Route {
        Route::Playlist(self.requested_id.clone())
    }

    fn controller(&self) -> &PlayerController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut PlayerController {
        &mut self.controller
    }

    fn render(&self) -> PageView {
        PageView::Playlist(self.view())
    }

    /// With nothing loaded, play/pause starts the first song
    fn on_play_pause(&mut self) -> PlaybackStatus {
        if self.controller.player().status() == PlaybackStatus::Idle {
            self.play_all();
            return self.controller.player().status();
        }
        self.controller.on_play_pause()
    }

    fn handle_page_event(&mut self, event: &UiEvent) -> Result<bool> {
        match event {
            UiEvent::PlayAll => {
                self.play_all();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

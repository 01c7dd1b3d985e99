use super::{Page, PageContext, PageView};
use crate::controller::PlayerController;
use crate::error::Result;
use crate::nav::{navigation_menu, NavItem};
use crate::route::Route;
use crate::ui_event::UiEvent;
use crate::view::{PlayerBarView, TrackView};
use dora_playback::RepeatMode;
use serde::Serialize;
use tracing::debug;

/// Full-screen view of the current track
#[derive(Debug)]
pub struct NowPlayingPage {
    controller: PlayerController,
    is_liked: bool,
    lyrics: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowPlayingView {
    pub nav: Vec<NavItem>,
    pub track: Option<TrackView>,
    pub is_liked: bool,
    pub shuffle_on: bool,
    pub repeat: RepeatMode,
    pub lyrics: Option<String>,
    pub player: PlayerBarView,
}

impl NowPlayingPage {
    pub fn mount(ctx: &PageContext) -> Self {
        let controller =
            PlayerController::mount(ctx.catalog.clone(), &ctx.player, &ctx.presets.now_playing);
        let lyrics = controller
            .player()
            .current_track()
            .and_then(|t| ctx.catalog.lyrics(&t.id));

        Self {
            controller,
            is_liked: true,
            lyrics,
        }
    }

    /// Heart button
    pub fn toggle_liked(&mut self) -> bool {
        self.is_liked = !self.is_liked;
        debug!(is_liked = self.is_liked, "Toggled like");
        self.is_liked
    }

    pub fn view(&self) -> NowPlayingView {
        let player = self.controller.view();
        NowPlayingView {
            nav: navigation_menu(&self.route().path()),
            track: player.track.clone(),
            is_liked: self.is_liked,
            shuffle_on: self.controller.queue().is_shuffled(),
            repeat: player.repeat,
            lyrics: self.lyrics.clone(),
            player,
        }
    }

    /// Reload lyrics after the track changed
    fn refresh_lyrics(&mut self) {
        let catalog = self.controller.catalog().clone();
        self.lyrics = self
            .controller
            .player()
            .current_track()
            .and_then(|t| catalog.lyrics(&t.id));
    }
}

impl Page for NowPlayingPage {
    fn route(&self) -> Route {
        Route::NowPlaying
    }

    fn controller(&self) -> &PlayerController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut PlayerController {
        &mut self.controller
    }

    fn render(&self) -> PageView {
        PageView::NowPlaying(self.view())
    }

    fn handle_page_event(&mut self, event: &UiEvent) -> Result<bool> {
        match event {
            UiEvent::Like => {
                self.toggle_liked();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn handle(&mut self, event: &UiEvent) -> Result<()> {
        let before = self.controller.player().current_track().map(|t| t.id.clone());
        super::dispatch(self, event)?;
        let after = self.controller.player().current_track().map(|t| t.id.clone());
        if before != after {
            self.refresh_lyrics();
        }
        Ok(())
    }
}

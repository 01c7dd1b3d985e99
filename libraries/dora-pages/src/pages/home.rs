use super::{Page, PageContext, PageView};
use crate::controller::PlayerController;
use crate::nav::{navigation_menu, NavItem};
use crate::route::Route;
use crate::view::{cards, CardView, PlayerBarView};
use dora_catalog::MediaItem;
use serde::Serialize;

/// Home page: featured and new-release grids
#[derive(Debug)]
pub struct HomePage {
    controller: PlayerController,
    featured: Vec<MediaItem>,
    new_releases: Vec<MediaItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub nav: Vec<NavItem>,
    pub featured: Vec<CardView>,
    pub new_releases: Vec<CardView>,
    pub player: PlayerBarView,
}

impl HomePage {
    pub fn mount(ctx: &PageContext) -> Self {
        let controller =
            PlayerController::mount(ctx.catalog.clone(), &ctx.player, &ctx.presets.home);
        Self {
            featured: ctx.catalog.featured(),
            new_releases: ctx.catalog.new_releases(),
            controller,
        }
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            nav: navigation_menu(&self.route().path()),
            featured: cards(&self.featured),
            new_releases: cards(&self.new_releases),
            player: self.controller.view(),
        }
    }
}

impl Page for HomePage {
    fn route(&self) -> Route {
        Route::Home
    }

    fn controller(&self) -> &PlayerController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut PlayerController {
        &mut self.controller
    }

    fn render(&self) -> PageView {
        PageView::Home(self.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dora_catalog::SampleCatalog;
    use dora_playback::PlaybackStatus;
    use std::sync::Arc;

    #[test]
    fn home_mounts_paused_at_thirty_percent() {
        let page = HomePage::mount(&PageContext::new(Arc::new(SampleCatalog::builtin())));
        let view = page.view();

        assert_eq!(view.featured.len(), 6);
        assert_eq!(view.new_releases.len(), 4);
        assert_eq!(view.new_releases[0].item.id, "a3");
        assert!(view.nav[0].is_active);

        assert_eq!(view.player.status, PlaybackStatus::Paused);
        assert_eq!(view.player.elapsed, "0:54");
        assert_eq!(view.player.volume, 70);
    }
}

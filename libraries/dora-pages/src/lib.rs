//! DoraMusic - Pages
//!
//! Page controllers for the five DoraMusic screens (Home, Library,
//! Now Playing, Search and the Playlist view). Every page embeds the same
//! [`PlayerController`], so the player bar behaves identically everywhere.
//!
//! # Architecture
//!
//! - [`Route`] parses a location path; [`mount`] builds the page for it
//! - a page turns [`UiEvent`]s into controller calls and renders a
//!   serialisable [`PageView`]
//! - catalog data comes from an injected `Arc<dyn CatalogProvider>`
//!
//! # Example
//!
//! ```rust
//! use dora_catalog::SampleCatalog;
//! use dora_pages::{mount, PageContext, PageView, Route, UiEvent};
//! use std::sync::Arc;
//!
//! let ctx = PageContext::new(Arc::new(SampleCatalog::builtin()));
//! let mut page = mount(&Route::parse("/playlist/dora-favs"), &ctx).unwrap();
//!
//! page.handle(&UiEvent::PlaySong("s2".into())).unwrap();
//! page.handle(&UiEvent::Seek(50.0)).unwrap();
//!
//! let PageView::Playlist(view) = page.render() else { unreachable!() };
//! assert_eq!(view.player.elapsed, "2:02");
//! ```

mod controller;
pub mod error;
mod nav;
pub mod pages;
mod preset;
mod route;
mod ui_event;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use controller::PlayerController;
pub use error::{PageError, Result};
pub use nav::{navigation_menu, NavItem};
pub use pages::{dispatch, mount, Page, PageContext, PageView};
pub use preset::{PagePreset, PagePresets, PresetOverride};
pub use route::Route;
pub use ui_event::UiEvent;
pub use view::{PlayerBarView, SongRowView, TrackView};

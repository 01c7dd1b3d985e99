//! Subcommand implementations
//!
//! Each command returns the JSON document to print, so `main` owns stdout.

use anyhow::Context;
use dora_pages::{mount, PageContext, PageView, Route, UiEvent};
use dora_playback::PlaybackEvent;
use serde::Serialize;
use tracing::info;

/// Output of `dora session`
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub view: PageView,
    pub events: Vec<PlaybackEvent>,
}

/// Mount the page for `path` and render it
pub fn render(ctx: &PageContext, path: &str) -> anyhow::Result<serde_json::Value> {
    let route = Route::parse(path);
    let page = mount(&route, ctx).with_context(|| format!("Cannot open {path}"))?;
    Ok(serde_json::to_value(page.render())?)
}

/// Search the catalog
pub fn search(ctx: &PageContext, query: &str) -> anyhow::Result<serde_json::Value> {
    let results = ctx.catalog.search(query);
    info!(query, hits = results.total(), "Search finished");
    Ok(serde_json::to_value(results)?)
}

/// Mount a page, replay `events` in order and report the final state
pub fn session(ctx: &PageContext, path: &str, events: &[String]) -> anyhow::Result<SessionReport> {
    let route = Route::parse(path);
    let mut page = mount(&route, ctx).with_context(|| format!("Cannot open {path}"))?;

    for raw in events {
        let event: UiEvent = raw.parse().with_context(|| format!("Bad event '{raw}'"))?;
        page.handle(&event)
            .with_context(|| format!("Event '{raw}' failed on {route}"))?;
    }
    info!(%route, events = events.len(), "Session replayed");

    let events = page.controller_mut().drain_events();
    Ok(SessionReport {
        view: page.render(),
        events,
    })
}

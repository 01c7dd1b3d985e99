//! WASM-compatible page wrapper

use crate::{mount, Page, PageContext, PageError, Route, UiEvent};
use dora_catalog::SampleCatalog;
use js_sys::Function;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// A mounted page driven from JavaScript
#[wasm_bindgen]
pub struct WasmPage {
    inner: Box<dyn Page>,

    // Event callbacks
    on_change: Option<Function>,
    on_error: Option<Function>,
}

fn to_js_error(error: &PageError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
impl WasmPage {
    /// Mount the page for `path` over the built-in catalog
    #[wasm_bindgen(constructor)]
    pub fn new(path: &str) -> Result<WasmPage, JsValue> {
        console_error_panic_hook::set_once();
        let ctx = PageContext::new(Arc::new(SampleCatalog::builtin()));
        Self::mount_with(path, &ctx)
    }

    /// Mount the page for `path` over a catalog given as JSON
    #[wasm_bindgen(js_name = withCatalog)]
    pub fn with_catalog(path: &str, catalog_json: &str) -> Result<WasmPage, JsValue> {
        console_error_panic_hook::set_once();
        let catalog = SampleCatalog::from_json_str(catalog_json)
            .map_err(|e| to_js_error(&PageError::from(e)))?;
        let ctx = PageContext::new(Arc::new(catalog));
        Self::mount_with(path, &ctx)
    }

    fn mount_with(path: &str, ctx: &PageContext) -> Result<WasmPage, JsValue> {
        let inner = mount(&Route::parse(path), ctx).map_err(|e| to_js_error(&e))?;
        Ok(Self {
            inner,
            on_change: None,
            on_error: None,
        })
    }

    // ===== Player Bar Callbacks =====

    #[wasm_bindgen(js_name = onPlayPause)]
    pub fn on_play_pause(&mut self) {
        self.apply(&UiEvent::PlayPause);
    }

    #[wasm_bindgen(js_name = onSeek)]
    pub fn on_seek(&mut self, percent: f64) {
        self.apply(&UiEvent::Seek(percent));
    }

    #[wasm_bindgen(js_name = onVolumeChange)]
    pub fn on_volume_change(&mut self, percent: f64) {
        self.apply(&UiEvent::Volume(percent));
    }

    #[wasm_bindgen(js_name = onToggleMute)]
    pub fn on_toggle_mute(&mut self) {
        self.apply(&UiEvent::ToggleMute);
    }

    #[wasm_bindgen(js_name = onNext)]
    pub fn on_next(&mut self) {
        self.apply(&UiEvent::Next);
    }

    #[wasm_bindgen(js_name = onPrevious)]
    pub fn on_previous(&mut self) {
        self.apply(&UiEvent::Previous);
    }

    #[wasm_bindgen(js_name = onPlaySong)]
    pub fn on_play_song(&mut self, id: String) {
        self.apply(&UiEvent::PlaySong(id));
    }

    #[wasm_bindgen(js_name = onAddToQueue)]
    pub fn on_add_to_queue(&mut self, id: String) {
        self.apply(&UiEvent::AddToQueue(id));
    }

    /// Advance simulated playback (call from a timer)
    ///
    /// Negative, NaN or oversized values are reported through `onError`.
    pub fn tick(&mut self, elapsed_secs: f64) {
        match std::time::Duration::try_from_secs_f64(elapsed_secs) {
            Ok(elapsed) => self.apply(&UiEvent::Tick(elapsed)),
            Err(_) => self.emit_error(&PageError::InvalidEvent(format!(
                "tick={elapsed_secs} is out of range"
            ))),
        }
    }

    /// Dispatch an event in text form (`"seek=50"`, `"tab=songs"`)
    pub fn handle(&mut self, event: &str) -> Result<(), JsValue> {
        let event: UiEvent = event.parse().map_err(|e| to_js_error(&e))?;
        self.inner.handle(&event).map_err(|e| to_js_error(&e))?;
        self.emit_change();
        Ok(())
    }

    // ===== Snapshots =====

    /// Rendered page as a JS object
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.render()).unwrap_or(JsValue::NULL)
    }

    /// Rendered page as JSON text
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.inner.render()).unwrap_or_default()
    }

    /// Playback events since the last call
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> JsValue {
        let events = self.inner.controller_mut().drain_events();
        serde_wasm_bindgen::to_value(&events).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register a callback receiving the new snapshot after every event
    #[wasm_bindgen(js_name = onChange)]
    pub fn set_on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    /// Register error callback
    #[wasm_bindgen(js_name = onError)]
    pub fn set_on_error(&mut self, callback: Function) {
        self.on_error = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn apply(&mut self, event: &UiEvent) {
        match self.inner.handle(event) {
            Ok(()) => self.emit_change(),
            Err(err) => self.emit_error(&err),
        }
    }

    fn emit_change(&self) {
        if let Some(ref cb) = self.on_change {
            cb.call1(&JsValue::NULL, &self.snapshot()).ok();
        }
    }

    fn emit_error(&self, error: &PageError) {
        if let Some(ref cb) = self.on_error {
            cb.call1(&JsValue::NULL, &to_js_error(error)).ok();
        }
    }
}

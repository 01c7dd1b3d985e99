//! WASM bindings for dora-pages
//!
//! Exposes a mounted page to JavaScript so a browser renderer can forward
//! its callbacks and bind to the rendered snapshot.

pub mod page;

pub use page::WasmPage;

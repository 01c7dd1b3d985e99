/// CLI configuration
use anyhow::Context;
use dora_catalog::{CatalogProvider, SampleCatalog};
use dora_pages::{PageContext, PagePresets, PresetOverride};
use dora_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "dora.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DoraConfig {
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// JSON catalog replacing the built-in sample data
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub pages: PageOverrides,
}

/// Per-page preset overrides (`[pages.home]`, `[pages.now_playing]`, ...)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PageOverrides {
    pub home: PresetOverride,
    pub library: PresetOverride,
    pub now_playing: PresetOverride,
    pub search: PresetOverride,
    pub playlist: PresetOverride,
}

impl Default for DoraConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            catalog_file: None,
            player: PlayerConfig::default(),
            pages: PageOverrides::default(),
        }
    }
}

impl DoraConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `dora.toml` is read when
    /// present. `DORA_`-prefixed variables override both, with `__` between
    /// nested keys (`DORA_PLAYER__UNMUTE_LEVEL=40`).
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("DORA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build().context("Failed to read configuration")?;
        config
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Built-in presets with the configured overrides applied
    pub fn presets(&self) -> PagePresets {
        let defaults = PagePresets::default();
        PagePresets {
            home: defaults.home.with_override(&self.pages.home),
            library: defaults.library.with_override(&self.pages.library),
            now_playing: defaults.now_playing.with_override(&self.pages.now_playing),
            search: defaults.search.with_override(&self.pages.search),
            playlist: defaults.playlist.with_override(&self.pages.playlist),
        }
    }

    /// Catalog from `catalog_file`, or the built-in sample data
    pub fn catalog(&self) -> anyhow::Result<Arc<dyn CatalogProvider>> {
        let catalog = match self.catalog_file {
            Some(ref path) => SampleCatalog::from_path(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
            None => SampleCatalog::builtin(),
        };
        Ok(Arc::new(catalog))
    }

    /// Everything a page needs to mount
    pub fn page_context(&self) -> anyhow::Result<PageContext> {
        Ok(PageContext {
            catalog: self.catalog()?,
            player: self.player.clone(),
            presets: self.presets(),
        })
    }
}

// Default values
fn default_log_filter() -> String {
    "dora=info,dora_pages=info,dora_catalog=info,dora_playback=info".to_string()
}

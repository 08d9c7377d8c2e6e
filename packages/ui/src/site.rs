//! Site configuration context and the shared content-store constructor.
//!
//! Returns a [`store::ContentStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): one JSON file per key via [`store::FileStore`]
//!
//! The store is cheap to build, so views create one per operation instead of
//! holding it in context.

use dioxus::prelude::*;
use store::SiteConfig;

/// Site configuration shared with every view through context.
pub type SiteSignal = Signal<SiteConfig>;

pub fn use_site_config() -> SiteSignal {
    use_context::<SiteSignal>()
}

/// Makes `config` available to descendants via [`use_site_config`].
#[component]
pub fn SiteProvider(config: SiteConfig, children: Element) -> Element {
    use_context_provider(|| Signal::new(config));
    rsx! {
        {children}
    }
}

/// Directory name under the platform data dir used by native builds.
pub const APP_DIR: &str = "realty-site";

/// Create a platform-appropriate content store for `config`'s namespace.
pub fn make_store(config: &SiteConfig) -> store::ContentStore<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::ContentStore::new(store::LocalStorageStore::new(), config)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        // Process-wide map so data survives between calls.
        static MEMORY: std::sync::OnceLock<store::MemoryStore> = std::sync::OnceLock::new();
        store::ContentStore::new(MEMORY.get_or_init(store::MemoryStore::new).clone(), config)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::ContentStore::new(store::FileStore::new(data_dir()), config)
    }
}

/// Native data directory: `<data_dir>/realty-site/`.
#[cfg(not(target_arch = "wasm32"))]
pub fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(APP_DIR)
}

/// Load `site.toml` from the native data directory, or the defaults if absent.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_site_config() -> SiteConfig {
    let path = data_dir().join(SiteConfig::filename());
    match std::fs::read_to_string(&path) {
        Ok(text) => SiteConfig::from_toml_or_default(&text),
        Err(_) => {
            tracing::debug!("no {} found, using defaults", path.display());
            SiteConfig::default()
        }
    }
}

//! Host-service bundle injected into the icon rendering layer.

use std::rc::Rc;

use icon_catalog::{icon_data, IconDataTable, ValidationCache};

use crate::{
    cache::{MemorySvgMarkupCache, NoopSvgMarkupCache, SvgMarkupCache},
    config::IconHostConfig,
    fetch::{NoopSvgAssetFetcher, SvgAssetFetcher},
    loader::SvgContentLoader,
};

/// Environment the icon layer is rendering in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEnvironment {
    /// Interactive browser with DOM and network access.
    Browser,
    /// Server-side rendering or native tests; no DOM, no fetches.
    Server,
}

impl HostEnvironment {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Server => "server",
        }
    }

    /// Whether DOM inspection and asset fetching are possible.
    pub const fn is_browser(self) -> bool {
        matches!(self, Self::Browser)
    }
}

/// Services shared by every icon instance in one application.
///
/// Environment-specific adapter selection happens before this bundle is provided to the UI, which
/// keeps components free of browser/server branching beyond [`IconHostServices::environment`].
#[derive(Clone)]
pub struct IconHostServices {
    /// Runtime configuration.
    pub config: IconHostConfig,
    /// Rendering environment.
    pub environment: HostEnvironment,
    /// Fetched SVG markup cache.
    pub svg_cache: Rc<dyn SvgMarkupCache>,
    /// Asset fetcher.
    pub fetcher: Rc<dyn SvgAssetFetcher>,
    /// Precompiled icon data.
    pub icon_data: Rc<IconDataTable>,
    /// Name validation memo.
    pub validation: Rc<ValidationCache>,
}

impl IconHostServices {
    /// Bundle for server rendering: builtin data, no cache retention, no network.
    pub fn server(config: IconHostConfig) -> Self {
        Self {
            config,
            environment: HostEnvironment::Server,
            svg_cache: Rc::new(NoopSvgMarkupCache),
            fetcher: Rc::new(NoopSvgAssetFetcher),
            icon_data: Rc::new(icon_data().clone()),
            validation: Rc::new(ValidationCache::new()),
        }
    }

    /// Browser bundle around a concrete fetcher, with a bounded in-memory markup cache.
    pub fn browser(config: IconHostConfig, fetcher: Rc<dyn SvgAssetFetcher>) -> Self {
        let svg_cache = Rc::new(MemorySvgMarkupCache::with_capacity(config.svg_cache_capacity));
        Self {
            config,
            environment: HostEnvironment::Browser,
            svg_cache,
            fetcher,
            icon_data: Rc::new(icon_data().clone()),
            validation: Rc::new(ValidationCache::new()),
        }
    }

    /// Replaces the precompiled data table.
    pub fn with_icon_data(mut self, table: IconDataTable) -> Self {
        self.icon_data = Rc::new(table);
        self
    }

    /// Replaces the markup cache.
    pub fn with_svg_cache(mut self, cache: Rc<dyn SvgMarkupCache>) -> Self {
        self.svg_cache = cache;
        self
    }

    /// Loader over this bundle's cache and fetcher.
    pub fn loader(&self) -> SvgContentLoader {
        SvgContentLoader::new(self.svg_cache.clone(), self.fetcher.clone())
    }

    /// Whether missing path data should be fetched.
    pub fn should_fetch(&self) -> bool {
        self.environment.is_browser() && self.config.fetch_missing_assets
    }

    /// Absolute URL for a public asset path.
    pub fn asset_url(&self, path: &str) -> String {
        self.config.asset_url(path)
    }
}

impl Default for IconHostServices {
    fn default() -> Self {
        Self::server(IconHostConfig::default())
    }
}

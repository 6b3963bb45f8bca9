use std::rc::Rc;

use platform_host::{
    FetchError, IconHostConfig, IconHostServices, NoopSvgAssetFetcher, SvgAssetFetcher,
    SvgFetchFuture,
};

use crate::WebSvgAssetFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected asset strategy for `platform_host_web` adapters.
pub enum AssetStrategy {
    /// Assets are fetched with `window.fetch` and cached in memory.
    Browser,
    /// No network access; icons render from precompiled data or the fallback glyph.
    Offline,
}

/// Returns the compile-time selected asset strategy for the active build.
pub const fn selected_asset_strategy() -> AssetStrategy {
    if cfg!(all(target_arch = "wasm32", not(feature = "offline-assets"))) {
        AssetStrategy::Browser
    } else {
        AssetStrategy::Offline
    }
}

/// Returns the selected asset strategy as a stable string token.
pub fn asset_strategy_name() -> &'static str {
    match selected_asset_strategy() {
        AssetStrategy::Browser => "browser",
        AssetStrategy::Offline => "offline",
    }
}

/// Adapter enum that erases the concrete fetch backend behind [`SvgAssetFetcher`].
#[derive(Debug, Clone, Copy)]
pub enum SvgAssetFetcherAdapter {
    /// Browser `fetch`-backed asset loading.
    Browser(WebSvgAssetFetcher),
    /// No-op fetcher used when network access is disabled.
    Offline(NoopSvgAssetFetcher),
}

impl SvgAssetFetcher for SvgAssetFetcherAdapter {
    fn fetch_text<'a>(&'a self, url: &'a str) -> SvgFetchFuture<'a, Result<String, FetchError>> {
        match self {
            Self::Browser(fetcher) => fetcher.fetch_text(url),
            Self::Offline(fetcher) => fetcher.fetch_text(url),
        }
    }
}

/// Builds the fetcher adapter for the selected strategy.
pub fn svg_asset_fetcher() -> SvgAssetFetcherAdapter {
    match selected_asset_strategy() {
        AssetStrategy::Browser => SvgAssetFetcherAdapter::Browser(WebSvgAssetFetcher),
        AssetStrategy::Offline => SvgAssetFetcherAdapter::Offline(NoopSvgAssetFetcher),
    }
}

/// Builds the icon host-service bundle for the selected strategy.
pub fn build_icon_host_services(config: IconHostConfig) -> IconHostServices {
    match selected_asset_strategy() {
        AssetStrategy::Browser => IconHostServices::browser(config, Rc::new(svg_asset_fetcher())),
        AssetStrategy::Offline => IconHostServices::server(config),
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;
    use platform_host::HostEnvironment;

    use super::*;

    #[test]
    fn native_builds_select_offline_strategy() {
        assert_eq!(selected_asset_strategy(), AssetStrategy::Offline);
        assert_eq!(asset_strategy_name(), "offline");
        let services = build_icon_host_services(IconHostConfig::default());
        assert_eq!(services.environment, HostEnvironment::Server);
        assert!(!services.should_fetch());
    }

    #[test]
    fn offline_adapter_delegates_to_noop_fetcher() {
        let adapter = svg_asset_fetcher();
        assert!(matches!(adapter, SvgAssetFetcherAdapter::Offline(_)));
        assert!(matches!(
            block_on(adapter.fetch_text("/icons/solid/gear.svg")),
            Err(FetchError::Unsupported { .. })
        ));
    }
}

//! Typed host-service contracts for icon asset loading.
//!
//! This crate is the API-first boundary between the icon UI layer and the environment it runs in.
//! It exposes the SVG markup cache and asset fetcher traits with in-memory/no-op adapters, SVG
//! document inspection, the fetch-then-cache loader, icon host configuration, and the
//! [`IconHostServices`] bundle. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod config;
pub mod fetch;
pub mod host;
pub mod loader;
pub mod svg;

pub use cache::{
    svg_cache_key, MemorySvgMarkupCache, NoopSvgMarkupCache, SvgMarkupCache,
    DEFAULT_SVG_CACHE_CAPACITY,
};
pub use config::{BuildMode, IconHostConfig, IconHostConfigError};
pub use fetch::{
    FetchError, NoopSvgAssetFetcher, StaticSvgAssetFetcher, SvgAssetFetcher, SvgFetchFuture,
};
pub use host::{HostEnvironment, IconHostServices};
pub use loader::{SvgContentLoader, SvgLoadError};
pub use svg::{extract_svg_inner_markup, parse_svg_asset, SvgAsset, SvgMarkupError};

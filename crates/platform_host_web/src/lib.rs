//! Browser (`wasm32`) implementations of [`platform_host`] icon service contracts.
//!
//! This crate is the concrete browser-side wiring for SVG asset fetching and DOM inspection.
//! Bridge bindings live under `bridge/`, with `bridge::interop` holding the shared wasm/non-wasm
//! transport glue.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time asset-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod dom;
pub mod fetch;

pub use adapters::{
    asset_strategy_name, build_icon_host_services, selected_asset_strategy, svg_asset_fetcher,
    AssetStrategy, SvgAssetFetcherAdapter,
};
pub use dom::{parent_has_class, parent_has_hover_group, HOVER_GROUP_CLASS};
pub use fetch::WebSvgAssetFetcher;

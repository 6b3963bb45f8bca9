//! Browser `fetch` adapter for SVG assets.

use platform_host::{FetchError, SvgAssetFetcher, SvgFetchFuture};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// SVG asset fetcher backed by `window.fetch`.
pub struct WebSvgAssetFetcher;

impl SvgAssetFetcher for WebSvgAssetFetcher {
    fn fetch_text<'a>(&'a self, url: &'a str) -> SvgFetchFuture<'a, Result<String, FetchError>> {
        Box::pin(async move { bridge::fetch_text(url).await })
    }
}

//! Fetch-then-cache loading of SVG inner markup.

use std::rc::Rc;

use thiserror::Error;

use crate::{
    cache::{svg_cache_key, SvgMarkupCache},
    fetch::{FetchError, SvgAssetFetcher},
    svg::{extract_svg_inner_markup, SvgMarkupError},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why fetched markup is unavailable for an icon.
pub enum SvgLoadError {
    /// The asset could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The body contains no `<svg>` element.
    #[error("SVG file at {url} does not contain an SVG element.")]
    MissingSvgElement {
        /// Requested URL.
        url: String,
    },
    /// The body is not well-formed.
    #[error("SVG file at {url} could not be parsed: {source}")]
    Markup {
        /// Requested URL.
        url: String,
        /// Parser failure.
        source: SvgMarkupError,
    },
}

/// Loads inner SVG markup for asset URLs through an injected cache and fetcher.
///
/// Each [`SvgContentLoader::load`] call performs at most one fetch. Concurrent loads of the same
/// URL are not coalesced; each successful load writes the same cache key, so the cache converges
/// to a single entry.
#[derive(Clone)]
pub struct SvgContentLoader {
    cache: Rc<dyn SvgMarkupCache>,
    fetcher: Rc<dyn SvgAssetFetcher>,
}

impl SvgContentLoader {
    /// Creates a loader over the given services.
    pub fn new(cache: Rc<dyn SvgMarkupCache>, fetcher: Rc<dyn SvgAssetFetcher>) -> Self {
        Self { cache, fetcher }
    }

    /// Cached markup for `url`, without touching the network.
    pub fn cached(&self, url: &str) -> Option<String> {
        self.cache.get(&svg_cache_key(url))
    }

    /// Returns cached markup or fetches, parses and caches it.
    ///
    /// # Errors
    ///
    /// Returns [`SvgLoadError`] when the fetch fails or the body has no usable `<svg>` element.
    /// Failures are not cached, so a later call retries.
    pub async fn load(&self, url: &str) -> Result<String, SvgLoadError> {
        if let Some(markup) = self.cached(url) {
            return Ok(markup);
        }
        let body = self.fetcher.fetch_text(url).await?;
        let markup = extract_svg_inner_markup(&body).map_err(|source| match source {
            SvgMarkupError::MissingSvgElement => SvgLoadError::MissingSvgElement {
                url: url.to_string(),
            },
            source @ SvgMarkupError::Parse(_) => SvgLoadError::Markup {
                url: url.to_string(),
                source,
            },
        })?;
        self.cache.put(&svg_cache_key(url), &markup);
        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        pin::Pin,
        task::{Context, Poll},
    };

    use futures::{executor::block_on, future::join};

    use super::*;
    use crate::{
        cache::MemorySvgMarkupCache,
        fetch::{StaticSvgAssetFetcher, SvgFetchFuture},
    };

    const URL: &str = "/icons/light/gear.svg";
    const GEAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512"><path d="M5 5"/></svg>"#;

    fn loader_with(fetcher: &StaticSvgAssetFetcher, cache: &MemorySvgMarkupCache) -> SvgContentLoader {
        SvgContentLoader::new(Rc::new(cache.clone()), Rc::new(fetcher.clone()))
    }

    #[test]
    fn load_fetches_once_then_serves_from_cache() {
        let fetcher = StaticSvgAssetFetcher::new().with_asset(URL, GEAR);
        let cache = MemorySvgMarkupCache::default();
        let loader = loader_with(&fetcher, &cache);

        assert_eq!(loader.cached(URL), None);
        assert_eq!(block_on(loader.load(URL)).expect("load"), r#"<path d="M5 5"/>"#);
        assert_eq!(block_on(loader.load(URL)).expect("cached"), r#"<path d="M5 5"/>"#);
        assert_eq!(fetcher.request_count(URL), 1);
        assert_eq!(cache.get(&svg_cache_key(URL)).as_deref(), Some(r#"<path d="M5 5"/>"#));
    }

    /// Yields once before delegating, so a second load can start before the first finishes.
    struct SlowFetcher(StaticSvgAssetFetcher);

    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                return Poll::Ready(());
            }
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }

    impl SvgAssetFetcher for SlowFetcher {
        fn fetch_text<'a>(
            &'a self,
            url: &'a str,
        ) -> SvgFetchFuture<'a, Result<String, FetchError>> {
            Box::pin(async move {
                YieldOnce(false).await;
                self.0.fetch_text(url).await
            })
        }
    }

    #[test]
    fn concurrent_loads_leave_one_valid_entry() {
        let fetcher = StaticSvgAssetFetcher::new().with_asset(URL, GEAR);
        let cache = MemorySvgMarkupCache::default();
        let slow: Rc<dyn SvgAssetFetcher> = Rc::new(SlowFetcher(fetcher.clone()));
        let first = SvgContentLoader::new(Rc::new(cache.clone()), slow.clone());
        let second = SvgContentLoader::new(Rc::new(cache.clone()), slow);

        let (a, b) = block_on(join(first.load(URL), second.load(URL)));
        assert_eq!(a.expect("first"), r#"<path d="M5 5"/>"#);
        assert_eq!(b.expect("second"), r#"<path d="M5 5"/>"#);
        assert_eq!(fetcher.request_count(URL), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.keys_by_recency(), vec![svg_cache_key(URL)]);
        assert_eq!(
            cache.get(&svg_cache_key(URL)).as_deref(),
            Some(r#"<path d="M5 5"/>"#)
        );
    }

    #[test]
    fn missing_asset_is_a_status_error_and_not_cached() {
        let fetcher = StaticSvgAssetFetcher::new();
        let cache = MemorySvgMarkupCache::default();
        let loader = loader_with(&fetcher, &cache);

        let err = block_on(loader.load(URL)).expect_err("404");
        assert_eq!(
            err,
            SvgLoadError::Fetch(FetchError::Status {
                url: URL.into(),
                status: 404
            })
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn bodies_without_svg_are_reported_with_the_url() {
        let fetcher = StaticSvgAssetFetcher::new().with_asset(URL, "<html/>");
        let cache = MemorySvgMarkupCache::default();
        let err = block_on(loader_with(&fetcher, &cache).load(URL)).expect_err("no svg");
        assert_eq!(
            err.to_string(),
            "SVG file at /icons/light/gear.svg does not contain an SVG element."
        );
    }
}

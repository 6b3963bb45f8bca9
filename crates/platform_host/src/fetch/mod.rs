//! SVG asset fetch contracts and non-network adapters.

mod static_assets;

use std::{future::Future, pin::Pin};

use thiserror::Error;

pub use static_assets::StaticSvgAssetFetcher;

/// Object-safe boxed future used by [`SvgAssetFetcher`].
pub type SvgFetchFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure to obtain the text body of an asset.
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("failed to load SVG from {url}: HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The request could not be completed.
    #[error("failed to load SVG from {url}: {message}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Transport-level detail.
        message: String,
    },
    /// The active host cannot perform network requests.
    #[error("SVG fetch is unavailable on this host: {url}")]
    Unsupported {
        /// Requested URL.
        url: String,
    },
}

/// Host service that reads an asset body as text.
pub trait SvgAssetFetcher {
    /// Fetches `url` once; no retries.
    fn fetch_text<'a>(&'a self, url: &'a str) -> SvgFetchFuture<'a, Result<String, FetchError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Fetcher for hosts without network access; every request is unsupported.
pub struct NoopSvgAssetFetcher;

impl SvgAssetFetcher for NoopSvgAssetFetcher {
    fn fetch_text<'a>(&'a self, url: &'a str) -> SvgFetchFuture<'a, Result<String, FetchError>> {
        Box::pin(async move {
            Err(FetchError::Unsupported {
                url: url.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn noop_fetcher_reports_unsupported() {
        let fetcher = NoopSvgAssetFetcher;
        let fetcher_obj: &dyn SvgAssetFetcher = &fetcher;
        let err = block_on(fetcher_obj.fetch_text("/icons/light/bell.svg")).expect_err("noop");
        assert_eq!(
            err,
            FetchError::Unsupported {
                url: "/icons/light/bell.svg".into()
            }
        );
    }

    #[test]
    fn status_errors_render_url_and_code() {
        let err = FetchError::Status {
            url: "/icons/light/missing.svg".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "failed to load SVG from /icons/light/missing.svg: HTTP 404"
        );
    }
}

//! Table-backed fetcher for server-side preloading and tests.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::{FetchError, SvgAssetFetcher, SvgFetchFuture};

#[derive(Debug, Clone, Default)]
/// Serves asset bodies from an in-memory URL table; unknown URLs answer HTTP 404.
///
/// Clones share the table and the request log.
pub struct StaticSvgAssetFetcher {
    assets: Rc<RefCell<HashMap<String, String>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl StaticSvgAssetFetcher {
    /// Creates an empty fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a body for `url`.
    pub fn insert(&self, url: impl Into<String>, body: impl Into<String>) {
        self.assets.borrow_mut().insert(url.into(), body.into());
    }

    /// Builder form of [`StaticSvgAssetFetcher::insert`].
    pub fn with_asset(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(url, body);
        self
    }

    /// Number of requests issued for `url`.
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|requested| requested.as_str() == url)
            .count()
    }

    /// Total number of requests issued.
    pub fn total_requests(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl SvgAssetFetcher for StaticSvgAssetFetcher {
    fn fetch_text<'a>(&'a self, url: &'a str) -> SvgFetchFuture<'a, Result<String, FetchError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(url.to_string());
            self.assets
                .borrow()
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        })
    }
}

//! SVG markup cache contracts and adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Default number of SVG documents retained by [`MemorySvgMarkupCache`].
pub const DEFAULT_SVG_CACHE_CAPACITY: usize = 256;

/// Cache key for the inner markup fetched from `url`.
pub fn svg_cache_key(url: &str) -> String {
    format!("svg-cache-{url}")
}

/// Session-scoped store of inner SVG markup keyed by [`svg_cache_key`].
///
/// Reads and writes are synchronous so a cached icon renders without a suspension point.
pub trait SvgMarkupCache {
    /// Reads cached markup.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores markup, replacing any previous value for `key`.
    fn put(&self, key: &str, markup: &str);

    /// Removes one entry.
    fn remove(&self, key: &str);

    /// Removes every entry.
    fn clear(&self);

    /// Number of cached entries.
    fn len(&self) -> usize;

    /// Whether the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op cache adapter for server rendering and baseline tests.
pub struct NoopSvgMarkupCache;

impl SvgMarkupCache for NoopSvgMarkupCache {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn put(&self, _key: &str, _markup: &str) {}

    fn remove(&self, _key: &str) {}

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}

#[derive(Debug, Default)]
struct LruState {
    entries: HashMap<String, (String, u64)>,
    clock: u64,
}

impl LruState {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, (_, used))| *used)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            self.entries.remove(&key);
        }
    }
}

#[derive(Debug, Clone)]
/// Bounded in-memory cache that evicts the least recently used entry when full.
///
/// Clones share the same storage.
pub struct MemorySvgMarkupCache {
    inner: Rc<RefCell<LruState>>,
    capacity: usize,
}

impl Default for MemorySvgMarkupCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SVG_CACHE_CAPACITY)
    }
}

impl MemorySvgMarkupCache {
    /// Creates a cache holding at most `capacity` entries. A zero capacity is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LruState::default())),
            capacity: capacity.max(1),
        }
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cached keys, least recently used first.
    pub fn keys_by_recency(&self) -> Vec<String> {
        let state = self.inner.borrow();
        let mut keys: Vec<(&String, u64)> = state
            .entries
            .iter()
            .map(|(key, (_, used))| (key, *used))
            .collect();
        keys.sort_by_key(|(_, used)| *used);
        let ordered = keys.into_iter().map(|(key, _)| key.clone()).collect();
        ordered
    }
}

impl SvgMarkupCache for MemorySvgMarkupCache {
    fn get(&self, key: &str) -> Option<String> {
        let mut state = self.inner.borrow_mut();
        let now = state.tick();
        let (markup, used) = state.entries.get_mut(key)?;
        *used = now;
        Some(markup.clone())
    }

    fn put(&self, key: &str, markup: &str) {
        let mut state = self.inner.borrow_mut();
        let now = state.tick();
        if !state.entries.contains_key(key) && state.entries.len() >= self.capacity {
            state.evict_oldest();
        }
        state
            .entries
            .insert(key.to_string(), (markup.to_string(), now));
    }

    fn remove(&self, key: &str) {
        self.inner.borrow_mut().entries.remove(key);
    }

    fn clear(&self) {
        self.inner.borrow_mut().entries.clear();
    }

    fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

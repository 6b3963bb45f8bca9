//! Cache-domain contracts and lightweight adapters.

mod svg_markup_cache;

pub use svg_markup_cache::{
    svg_cache_key, MemorySvgMarkupCache, NoopSvgMarkupCache, SvgMarkupCache,
    DEFAULT_SVG_CACHE_CAPACITY,
};

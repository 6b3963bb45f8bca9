//! Runtime-agnostic icon vocabulary for the UI layer.
//!
//! This crate owns everything about icons that does not need a renderer or a browser: the static
//! mapping tables (semantic aliases, platform logos, KPI/app/brand sets), pure name and asset
//! path derivation, memoized name validation, the generated [`IconDataTable`], the embedded
//! critical glyphs, and typed resolution of an [`IconRequest`] into a [`ResolvedIcon`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod critical;
pub mod data;
pub mod maps;
pub mod names;
pub mod resolve;
pub mod style;
pub mod validation;

pub use critical::{critical_glyph, is_critical_icon, CriticalGlyph, CRITICAL_GLYPHS};
pub use data::{
    icon_data, icon_data_key, IconData, IconDataTable, DEFAULT_VIEWBOX_EDGE, FALLBACK_ICON_PATH,
};
pub use maps::{
    platform_icon_name, semantic_alias, PlatformName, UnknownPlatform, APP_ICON_NAMES,
    BRAND_ICON_NAMES, KPI_ICON_NAMES, PLATFORM_ICON_MAP, SEMANTIC_TO_FA_MAP,
};
pub use names::{
    icon_base_name, icon_cache_key, icon_path, icon_path_default, icon_prefix,
    normalize_icon_name, to_kebab_case,
};
pub use resolve::{
    resolve_icon, IconRef, IconRequest, IconResolutionError, IconSource, ResolvedIcon,
    StandardIcon,
};
pub use style::{style_from_prefix, style_from_prefix_token, IconPrefix, IconStyle};
pub use validation::{
    clear_validation_cache, validate_dynamic_name, validate_icon_usage, validate_icon_usage_with,
    IconType, IconUsage, IconValidationIssue, ValidationCache,
};

//! Icon host configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::DEFAULT_SVG_CACHE_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Build flavor; development enables advisory validation diagnostics.
pub enum BuildMode {
    /// Development build with validation warnings.
    Development,
    /// Production build; validation hooks are inert.
    #[default]
    Production,
}

impl BuildMode {
    /// Build mode implied by the compiler profile.
    pub const fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Whether development diagnostics are enabled.
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Runtime settings for icon asset loading.
pub struct IconHostConfig {
    /// Prefix prepended to `/icons/...` asset paths (e.g. a CDN origin).
    pub asset_base_url: String,
    /// Maximum number of fetched SVG documents kept in memory.
    pub svg_cache_capacity: usize,
    /// Build flavor.
    pub build_mode: BuildMode,
    /// Fetch asset markup when no precompiled path exists.
    pub fetch_missing_assets: bool,
}

impl Default for IconHostConfig {
    fn default() -> Self {
        Self {
            asset_base_url: String::new(),
            svg_cache_capacity: DEFAULT_SVG_CACHE_CAPACITY,
            build_mode: BuildMode::default(),
            fetch_missing_assets: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Invalid icon host configuration.
pub enum IconHostConfigError {
    /// TOML could not be deserialized.
    #[error("failed to parse icon host config: {0}")]
    Parse(String),
    /// Cache capacity must be positive.
    #[error("svg_cache_capacity must be greater than zero")]
    ZeroCacheCapacity,
}

impl IconHostConfig {
    /// Parses and validates a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`IconHostConfigError`] for malformed TOML or out-of-range values.
    pub fn from_toml_str(raw: &str) -> Result<Self, IconHostConfigError> {
        let config: Self =
            toml::from_str(raw).map_err(|err| IconHostConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks semantic constraints not expressible in the TOML schema.
    ///
    /// # Errors
    ///
    /// Returns [`IconHostConfigError::ZeroCacheCapacity`] for a zero cache capacity.
    pub fn validate(&self) -> Result<(), IconHostConfigError> {
        if self.svg_cache_capacity == 0 {
            return Err(IconHostConfigError::ZeroCacheCapacity);
        }
        Ok(())
    }

    /// Absolute asset URL for a public asset path.
    pub fn asset_url(&self, path: &str) -> String {
        let base = self.asset_base_url.trim_end_matches('/');
        format!("{base}{path}")
    }
}

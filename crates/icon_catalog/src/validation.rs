//! Icon name validation with a memoizing cache.
//!
//! Validation is advisory: results feed development diagnostics and never gate rendering.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    sync::LazyLock,
};

use regex::Regex;
use thiserror::Error;

use crate::names::normalize_icon_name;

static FONTAWESOME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^fa[A-Z][a-zA-Z0-9]+$").expect("fontawesome pattern"));
static SEMANTIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z-]+$").expect("semantic pattern"));
static LIGHT_VARIANT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(fa[a-z]|fa)[A-Z][a-zA-Z0-9]+Light$").expect("light variant pattern")
});

fn matches_any_pattern(name: &str) -> bool {
    FONTAWESOME_PATTERN.is_match(name)
        || SEMANTIC_PATTERN.is_match(name)
        || LIGHT_VARIANT_PATTERN.is_match(name)
}

/// Memo of name validation results keyed by the literal name.
///
/// Entries are never evicted; [`ValidationCache::clear`] is the only way to reset the memo.
#[derive(Debug, Default)]
pub struct ValidationCache {
    results: RefCell<HashMap<String, bool>>,
    pattern_evaluations: Cell<u64>,
}

impl ValidationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `name` is a well-formed icon name, evaluating the patterns only on the
    /// first call for a given string.
    pub fn validate(&self, name: &str) -> bool {
        if let Some(valid) = self.results.borrow().get(name) {
            return *valid;
        }
        self.pattern_evaluations
            .set(self.pattern_evaluations.get() + 1);
        let valid = matches_any_pattern(name);
        self.results.borrow_mut().insert(name.to_string(), valid);
        valid
    }

    /// Drops all memoized results.
    pub fn clear(&self) {
        self.results.borrow_mut().clear();
    }

    /// Number of memoized names.
    pub fn len(&self) -> usize {
        self.results.borrow().len()
    }

    /// Whether no names are memoized.
    pub fn is_empty(&self) -> bool {
        self.results.borrow().is_empty()
    }

    /// How many times the pattern set has been evaluated since creation.
    pub fn pattern_evaluations(&self) -> u64 {
        self.pattern_evaluations.get()
    }
}

thread_local! {
    static DEFAULT_VALIDATION_CACHE: ValidationCache = ValidationCache::new();
}

/// Validates `name` through the thread-local default cache.
pub fn validate_dynamic_name(name: &str) -> bool {
    DEFAULT_VALIDATION_CACHE.with(|cache| cache.validate(name))
}

/// Clears the thread-local default cache.
pub fn clear_validation_cache() {
    DEFAULT_VALIDATION_CACHE.with(ValidationCache::clear);
}

/// Runs `f` against the thread-local default cache.
pub fn with_validation_cache<R>(f: impl FnOnce(&ValidationCache) -> R) -> R {
    DEFAULT_VALIDATION_CACHE.with(f)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Interaction role of a rendered icon.
pub enum IconType {
    /// Decorative icon with no hover behavior.
    #[default]
    Static,
    /// Icon inside an interactive control; swaps light to solid on hover.
    Button,
}

impl IconType {
    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Button => "button",
        }
    }
}

/// Props of one icon usage that validation inspects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IconUsage {
    /// Icon name as supplied by the caller.
    pub name: String,
    /// Solid variant requested.
    pub solid: bool,
    /// Interaction role.
    pub icon_type: IconType,
    /// Extra classes applied by the caller.
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Advisory finding about an icon usage.
pub enum IconValidationIssue {
    /// The name matches none of the accepted shapes.
    #[error("invalid icon name `{name}`: expected faPascalCase, kebab-case or a Light variant")]
    InvalidName {
        /// Offending name.
        name: String,
    },
    /// Button icons rendered solid have no visible hover swap.
    #[error("button icon `{name}` requested as solid; the hover swap will not be visible")]
    SolidButton {
        /// Offending name.
        name: String,
    },
    /// Static icons should not carry group-hover classes.
    #[error("static icon `{name}` carries group-hover classes; use icon_type=button instead")]
    StaticWithGroupHover {
        /// Offending name.
        name: String,
    },
}

/// Checks one usage against the thread-local validation cache.
pub fn validate_icon_usage(usage: &IconUsage) -> Vec<IconValidationIssue> {
    with_validation_cache(|cache| validate_icon_usage_with(cache, usage))
}

/// Checks one usage against an explicit validation cache.
pub fn validate_icon_usage_with(
    cache: &ValidationCache,
    usage: &IconUsage,
) -> Vec<IconValidationIssue> {
    let mut issues = Vec::new();
    let name = normalize_icon_name(&usage.name);
    if !cache.validate(&usage.name) && !cache.validate(name) {
        issues.push(IconValidationIssue::InvalidName {
            name: usage.name.clone(),
        });
    }
    if usage.icon_type == IconType::Button && usage.solid {
        issues.push(IconValidationIssue::SolidButton {
            name: usage.name.clone(),
        });
    }
    if usage.icon_type == IconType::Static && usage.class.contains("group-hover:") {
        issues.push(IconValidationIssue::StaticWithGroupHover {
            name: usage.name.clone(),
        });
    }
    issues
}

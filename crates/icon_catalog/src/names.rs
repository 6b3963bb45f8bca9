//! Pure name and asset-path derivation for icon identifiers.
//!
//! Names come in three shapes: semantic aliases (`"edit"`), FontAwesome-style identifiers
//! (`"faUser"`, `"fasUser"`, `"faUserLight"`) and raw base names (`"user-circle"`). Every
//! function here is total; unrecognized input passes through unchanged.

use crate::maps::{semantic_alias, APP_ICON_NAMES, BRAND_ICON_NAMES, KPI_ICON_NAMES};
use crate::style::{IconPrefix, IconStyle};

const LIGHT_SUFFIX: &str = "Light";

fn followed_by_uppercase(name: &str, prefix_len: usize) -> bool {
    name[prefix_len..]
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_uppercase())
}

/// Returns the prefix at the front of `name`: an explicit `fas`/`far`/`fal`/`fab` when followed
/// by an uppercase letter, otherwise the generic `fa`.
pub fn icon_prefix(name: &str) -> IconPrefix {
    IconPrefix::EXPLICIT
        .into_iter()
        .find(|prefix| {
            let token = prefix.token();
            name.starts_with(token) && followed_by_uppercase(name, token.len())
        })
        .unwrap_or(IconPrefix::Generic)
}

/// Strips a recognized style prefix from the front of `name`.
///
/// `"fasUserCircle"` yields `"UserCircle"` and `"faUser"` yields `"User"`. Names without a
/// prefix are returned unchanged, which makes the function idempotent on its own output.
pub fn icon_base_name(name: &str) -> &str {
    let prefix = icon_prefix(name);
    let token = prefix.token();
    if name.starts_with(token) && followed_by_uppercase(name, token.len()) {
        &name[token.len()..]
    } else {
        name
    }
}

/// Splits a trailing `Light` variant marker off a prefixed identifier.
///
/// Returns the identifier without the marker and whether the marker was present. Only prefixed
/// names carry the marker; `"Light"` alone or `"faLight"` are left untouched.
pub fn split_light_suffix(name: &str) -> (&str, bool) {
    match name.strip_suffix(LIGHT_SUFFIX) {
        Some(stem) if stem.starts_with("fa") && icon_base_name(stem) != stem => (stem, true),
        _ => (name, false),
    }
}

/// Converts `camelCase`/`PascalCase` to `kebab-case`.
///
/// A hyphen is inserted between a lowercase letter or digit and a following uppercase letter,
/// and at the end of an uppercase run that starts a new word (`XTwitter` becomes `x-twitter`).
pub fn to_kebab_case(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len() + 4);
    for (index, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() && index > 0 {
            let prev = chars[index - 1];
            let next_is_lower = chars
                .get(index + 1)
                .is_some_and(|next| next.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary {
                out.push('-');
            }
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Applies the semantic alias table, falling back to the name itself.
pub fn normalize_icon_name(name: &str) -> &str {
    semantic_alias(name).unwrap_or(name)
}

/// Cache key for a normalized icon in a given style.
pub fn icon_cache_key(name: &str, style: IconStyle) -> String {
    format!("icon-{}-{}", normalize_icon_name(name), style.folder())
}

/// Kebab-case asset stem for `name`, without style prefix or `Light` marker.
pub fn icon_asset_stem(name: &str) -> String {
    let (stem, _) = split_light_suffix(name);
    to_kebab_case(icon_base_name(stem))
}

/// Whether the kebab-case stem names a brand logo.
pub fn is_brand_icon(stem: &str) -> bool {
    BRAND_ICON_NAMES.contains(&stem)
}

/// Whether the kebab-case stem names a KPI icon.
pub fn is_kpi_icon(stem: &str) -> bool {
    KPI_ICON_NAMES
        .iter()
        .any(|kpi| to_kebab_case(kpi) == stem)
}

/// Whether the kebab-case stem names an app navigation icon.
pub fn is_app_icon(stem: &str) -> bool {
    APP_ICON_NAMES.contains(&stem)
}

/// Folder that holds `stem` regardless of the requested style: `brands`, `kpis` or `app`.
pub fn fixed_asset_folder(stem: &str) -> Option<&'static str> {
    if is_brand_icon(stem) {
        Some(IconStyle::Brands.folder())
    } else if is_kpi_icon(stem) {
        Some("kpis")
    } else if is_app_icon(stem) {
        Some("app")
    } else {
        None
    }
}

/// Builds the public asset path for `name` in `style`.
///
/// Brand logos always resolve under `/icons/brands/`, KPI icons under `/icons/kpis/` and app
/// navigation icons under `/icons/app/`; everything else lands in the requested style folder.
pub fn icon_path(name: &str, style: IconStyle) -> String {
    let stem = icon_asset_stem(name);
    let folder = fixed_asset_folder(&stem).unwrap_or(style.folder());
    format!("/icons/{folder}/{stem}.svg")
}

/// [`icon_path`] with the default light style.
pub fn icon_path_default(name: &str) -> String {
    icon_path(name, IconStyle::Light)
}

/// Converts a camelCase/kebab token to a `fa`-prefixed identifier (`actionIntent` becomes
/// `faActionIntent`).
pub fn fa_identifier(token: &str) -> String {
    let mut out = String::from("fa");
    let mut upper_next = true;
    for ch in token.chars() {
        if ch == '-' || ch == '_' || ch == ' ' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_known_prefixes() {
        assert_eq!(icon_base_name("fasUserCircle"), "UserCircle");
        assert_eq!(icon_base_name("faUser"), "User");
        assert_eq!(icon_base_name("fabGithub"), "Github");
        assert_eq!(icon_base_name("unknown-name"), "unknown-name");
        assert_eq!(icon_base_name(""), "");
    }

    #[test]
    fn base_name_is_idempotent() {
        for name in ["unknown-name", "fasUserCircle", "faUser", "fast", "User"] {
            let once = icon_base_name(name);
            assert_eq!(icon_base_name(once), once, "{name}");
        }
    }

    #[test]
    fn prefix_detection_requires_uppercase_boundary() {
        assert_eq!(icon_prefix("fasUser").token(), "fas");
        assert_eq!(icon_prefix("faUser").token(), "fa");
        assert_eq!(icon_prefix("").token(), "fa");
        assert_eq!(icon_prefix("fabFacebook").token(), "fab");
        assert_eq!(icon_prefix("falBell").token(), "fal");
        assert_eq!(icon_prefix("farBell").token(), "far");
        // "fas" followed by lowercase is not a style prefix.
        assert_eq!(icon_prefix("fast").token(), "fa");
    }

    #[test]
    fn kebab_case_splits_word_boundaries() {
        assert_eq!(to_kebab_case("UserCircle"), "user-circle");
        assert_eq!(to_kebab_case("brandAwareness"), "brand-awareness");
        assert_eq!(to_kebab_case("XTwitter"), "x-twitter");
        assert_eq!(to_kebab_case("Html5Logo"), "html5-logo");
        assert_eq!(to_kebab_case("mmm"), "mmm");
    }

    #[test]
    fn paths_follow_folder_conventions() {
        assert_eq!(
            icon_path("faUserCircle", IconStyle::Solid),
            "/icons/solid/user-circle.svg"
        );
        assert_eq!(icon_path_default("faFacebook"), "/icons/brands/facebook.svg");
        assert_eq!(
            icon_path("faFacebook", IconStyle::Solid),
            "/icons/brands/facebook.svg"
        );
        assert_eq!(icon_path_default("faXTwitter"), "/icons/brands/x-twitter.svg");
        assert_eq!(
            icon_path("faBrandAwareness", IconStyle::Solid),
            "/icons/kpis/brand-awareness.svg"
        );
        assert_eq!(
            icon_path_default("faCreativeAssetTesting"),
            "/icons/app/creative-asset-testing.svg"
        );
        assert_eq!(icon_path_default("faBell"), "/icons/light/bell.svg");
    }

    #[test]
    fn light_marker_is_dropped_from_paths() {
        assert_eq!(split_light_suffix("faUserLight"), ("faUser", true));
        assert_eq!(split_light_suffix("faLight"), ("faLight", false));
        assert_eq!(split_light_suffix("Light"), ("Light", false));
        assert_eq!(icon_path_default("faUserLight"), "/icons/light/user.svg");
    }

    #[test]
    fn normalization_and_cache_keys_use_semantic_aliases() {
        assert_eq!(normalize_icon_name("edit"), "faPen");
        assert_eq!(normalize_icon_name("faCustom"), "faCustom");
        assert_eq!(icon_cache_key("edit", IconStyle::Solid), "icon-faPen-solid");
    }

    #[test]
    fn fa_identifier_pascal_cases_tokens() {
        assert_eq!(fa_identifier("actionIntent"), "faActionIntent");
        assert_eq!(fa_identifier("brand-health"), "faBrandHealth");
        assert_eq!(fa_identifier("mmm"), "faMmm");
    }
}

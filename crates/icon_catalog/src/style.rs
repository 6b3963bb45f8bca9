//! Icon style variants and the name prefixes that select them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Parallel asset set an icon is drawn from.
pub enum IconStyle {
    /// Filled glyphs (`fas`).
    Solid,
    /// Thin-stroke glyphs (`fal`, and the generic `fa` prefix).
    #[default]
    Light,
    /// Brand/platform logos (`fab`).
    Brands,
    /// Regular-weight glyphs (`far`).
    Regular,
}

impl IconStyle {
    /// All styles in asset-folder scan order.
    pub const ALL: [Self; 4] = [Self::Solid, Self::Light, Self::Brands, Self::Regular];

    /// Asset folder name under `/icons/`.
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Light => "light",
            Self::Brands => "brands",
            Self::Regular => "regular",
        }
    }

    /// Parses a folder/style token. Accepts `brand` as an alias of `brands`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "solid" => Some(Self::Solid),
            "light" => Some(Self::Light),
            "brands" | "brand" => Some(Self::Brands),
            "regular" => Some(Self::Regular),
            _ => None,
        }
    }

    /// Suffix appended to an identifier to form its data-table key in this style.
    ///
    /// Solid and brand data use the bare identifier.
    pub const fn data_key_suffix(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Regular => "Regular",
            Self::Solid | Self::Brands => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Style prefix carried at the front of a FontAwesome-style name.
pub enum IconPrefix {
    /// Generic `fa`; treated as light.
    Generic,
    /// `fas`
    Solid,
    /// `far`
    Regular,
    /// `fal`
    Light,
    /// `fab`
    Brands,
}

impl IconPrefix {
    /// Explicit prefixes checked before the generic `fa`.
    pub const EXPLICIT: [Self; 4] = [Self::Solid, Self::Regular, Self::Light, Self::Brands];

    /// Stable prefix token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Generic => "fa",
            Self::Solid => "fas",
            Self::Regular => "far",
            Self::Light => "fal",
            Self::Brands => "fab",
        }
    }

    /// Parses a prefix token; unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "fa" => Some(Self::Generic),
            "fas" => Some(Self::Solid),
            "far" => Some(Self::Regular),
            "fal" => Some(Self::Light),
            "fab" => Some(Self::Brands),
            _ => None,
        }
    }

    /// Prefix selecting `style`.
    pub const fn for_style(style: IconStyle) -> Self {
        match style {
            IconStyle::Solid => Self::Solid,
            IconStyle::Light => Self::Light,
            IconStyle::Brands => Self::Brands,
            IconStyle::Regular => Self::Regular,
        }
    }
}

/// Maps a prefix to its style folder. The generic `fa` prefix selects light.
pub const fn style_from_prefix(prefix: IconPrefix) -> IconStyle {
    match prefix {
        IconPrefix::Solid => IconStyle::Solid,
        IconPrefix::Brands => IconStyle::Brands,
        IconPrefix::Regular => IconStyle::Regular,
        IconPrefix::Light | IconPrefix::Generic => IconStyle::Light,
    }
}

/// String form of [`style_from_prefix`]; any unrecognized token selects light.
pub fn style_from_prefix_token(prefix: &str) -> IconStyle {
    IconPrefix::from_token(prefix)
        .map(style_from_prefix)
        .unwrap_or(IconStyle::Light)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_map_to_style_folders() {
        assert_eq!(style_from_prefix_token("fas").folder(), "solid");
        assert_eq!(style_from_prefix_token("fal").folder(), "light");
        assert_eq!(style_from_prefix_token("fab").folder(), "brands");
        assert_eq!(style_from_prefix_token("far").folder(), "regular");
        assert_eq!(style_from_prefix_token("fa"), IconStyle::Light);
        assert_eq!(style_from_prefix_token("fad"), IconStyle::Light);
    }

    #[test]
    fn style_tokens_round_trip_through_prefixes() {
        for style in IconStyle::ALL {
            assert_eq!(IconStyle::from_token(style.folder()), Some(style));
            assert_eq!(style_from_prefix(IconPrefix::for_style(style)), style);
        }
        assert_eq!(IconStyle::from_token("brand"), Some(IconStyle::Brands));
        assert_eq!(IconStyle::from_token("duotone"), None);
    }

    #[test]
    fn style_serializes_as_lowercase_folder() {
        let raw = serde_json::to_string(&IconStyle::Brands).expect("serialize");
        assert_eq!(raw, "\"brands\"");
        let parsed: IconStyle = serde_json::from_str("\"solid\"").expect("deserialize");
        assert_eq!(parsed, IconStyle::Solid);
    }
}

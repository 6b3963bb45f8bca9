//! Static icon mapping tables: semantic aliases, platform logos, KPI, app and brand sets.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic alias to canonical FontAwesome-style identifier.
pub const SEMANTIC_TO_FA_MAP: &[(&str, &str)] = &[
    ("add", "faPlus"),
    ("delete", "faTrash"),
    ("edit", "faPen"),
    ("save", "faSave"),
    ("close", "faXmark"),
    ("check", "faCheck"),
    ("info", "faInfo"),
    ("warning", "faTriangleExclamation"),
    ("error", "faCircleXmark"),
    ("success", "faCircleCheck"),
    ("user", "faUser"),
    ("settings", "faGear"),
    ("search", "faMagnifyingGlass"),
    ("calendar", "faCalendar"),
    ("chevron-right", "faChevronRight"),
    ("chevron-left", "faChevronLeft"),
    ("chevron-up", "faChevronUp"),
    ("chevron-down", "faChevronDown"),
    ("arrow-right", "faArrowRight"),
    ("arrow-left", "faArrowLeft"),
    ("arrow-up", "faArrowUp"),
    ("arrow-down", "faArrowDown"),
    ("home", "faHome"),
    ("menu", "faBars"),
    ("bell", "faBell"),
    ("coins", "faCoins"),
    ("upload", "faUpload"),
    ("download", "faDownload"),
    ("copy", "faCopy"),
    ("more", "faEllipsisVertical"),
    ("link", "faLink"),
    ("play", "faPlay"),
    ("pause", "faPause"),
    ("stop", "faStop"),
    ("cog", "faGear"),
    ("times", "faXmark"),
    ("xmark", "faXmark"),
    ("x-circle", "faCircleXmark"),
    ("angles-left", "faAnglesLeft"),
    ("angles-right", "faAnglesRight"),
    ("github", "faGithub"),
];

/// Looks up a semantic alias.
pub fn semantic_alias(name: &str) -> Option<&'static str> {
    SEMANTIC_TO_FA_MAP
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Social platforms with a dedicated brand logo.
pub enum PlatformName {
    /// Facebook.
    Facebook,
    /// Instagram.
    Instagram,
    /// LinkedIn.
    Linkedin,
    /// TikTok.
    Tiktok,
    /// YouTube.
    Youtube,
    /// X (formerly Twitter).
    X,
}

impl PlatformName {
    /// All supported platforms.
    pub const ALL: [Self; 6] = [
        Self::Facebook,
        Self::Instagram,
        Self::Linkedin,
        Self::Tiktok,
        Self::Youtube,
        Self::X,
    ];

    /// Stable lowercase token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
            Self::Youtube => "youtube",
            Self::X => "x",
        }
    }

    /// Brand icon identifier for the platform.
    pub const fn icon_name(self) -> &'static str {
        match self {
            Self::Facebook => "faFacebook",
            Self::Instagram => "faInstagram",
            Self::Linkedin => "faLinkedin",
            Self::Tiktok => "faTiktok",
            Self::Youtube => "faYoutube",
            Self::X => "faXTwitter",
        }
    }
}

impl fmt::Display for PlatformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform name: {0}")]
/// Token that names no supported platform.
pub struct UnknownPlatform(pub String);

impl FromStr for PlatformName {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.token() == value)
            .ok_or_else(|| UnknownPlatform(value.to_string()))
    }
}

/// Platform token to brand icon identifier.
pub const PLATFORM_ICON_MAP: &[(&str, &str)] = &[
    ("facebook", "faFacebook"),
    ("instagram", "faInstagram"),
    ("linkedin", "faLinkedin"),
    ("tiktok", "faTiktok"),
    ("youtube", "faYoutube"),
    ("x", "faXTwitter"),
];

/// Resolves a raw platform token; `None` for platforms without a logo.
pub fn platform_icon_name(platform: &str) -> Option<&'static str> {
    platform
        .parse::<PlatformName>()
        .ok()
        .map(PlatformName::icon_name)
}

/// KPI icon names; assets live under `/icons/kpis/`.
pub const KPI_ICON_NAMES: &[&str] = &[
    "actionIntent",
    "adRecall",
    "advocacy",
    "brandAwareness",
    "brandPreference",
    "consideration",
    "messageAssociation",
    "purchaseIntent",
];

/// App navigation icon names (kebab-case); assets live under `/icons/app/`.
pub const APP_ICON_NAMES: &[&str] = &[
    "creative-asset-testing",
    "brand-health",
    "brand-lift",
    "campaigns",
    "help",
    "home",
    "influencers",
    "mmm",
    "reports",
    "settings",
    "billing",
];

/// Brand logo base names (kebab-case); assets always live under `/icons/brands/`.
pub const BRAND_ICON_NAMES: &[&str] = &[
    "facebook",
    "instagram",
    "linkedin",
    "tiktok",
    "youtube",
    "x-twitter",
    "github",
    "google",
    "pinterest",
    "snapchat",
    "twitter",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_table_and_enum_agree() {
        for (token, icon) in PLATFORM_ICON_MAP {
            let platform: PlatformName = token.parse().expect("known platform");
            assert_eq!(platform.icon_name(), *icon);
            assert_eq!(platform.to_string(), *token);
        }
    }

    #[test]
    fn unknown_platform_has_no_icon() {
        assert_eq!(platform_icon_name("myspace"), None);
        assert_eq!(platform_icon_name("x"), Some("faXTwitter"));
        let err = "myspace".parse::<PlatformName>().expect_err("unknown");
        assert_eq!(err.to_string(), "unknown platform name: myspace");
    }

    #[test]
    fn semantic_aliases_resolve_to_fontawesome_names() {
        assert_eq!(semantic_alias("edit"), Some("faPen"));
        assert_eq!(semantic_alias("search"), Some("faMagnifyingGlass"));
        assert_eq!(semantic_alias("faPen"), None);
    }

    #[test]
    fn platform_logos_are_brand_icons() {
        for platform in PlatformName::ALL {
            assert!(
                BRAND_ICON_NAMES.contains(&platform.token())
                    || platform == PlatformName::X,
                "{platform}"
            );
        }
        assert!(BRAND_ICON_NAMES.contains(&"x-twitter"));
    }
}

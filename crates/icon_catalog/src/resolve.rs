//! Typed icon resolution: reference -> canonical name -> style -> vector source.
//!
//! Resolution is fallible so callers and tests can inspect why an icon did not resolve; the
//! rendering layer coerces every error into the fallback glyph.

use thiserror::Error;

use crate::{
    critical::{critical_glyph, CriticalGlyph},
    data::{IconData, IconDataTable, DEFAULT_VIEWBOX_EDGE},
    maps::PlatformName,
    names::{
        fa_identifier, icon_asset_stem, icon_path, icon_prefix, is_brand_icon,
        normalize_icon_name, split_light_suffix,
    },
    style::{style_from_prefix, IconStyle},
    validation::IconType,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Which icon the caller asked for. Exactly one kind of name is ever supplied.
pub enum IconRef {
    /// Semantic alias, FontAwesome-style identifier or raw base name.
    Name(String),
    /// Social platform logo.
    Platform(PlatformName),
    /// KPI icon by KPI name (`brandAwareness`).
    Kpi(String),
    /// App navigation icon by app name (`brand-health`).
    App(String),
}

impl IconRef {
    /// Shorthand for [`IconRef::Name`].
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Parses a platform token.
    ///
    /// # Errors
    ///
    /// Returns [`IconResolutionError::UnknownPlatform`] for platforms without a logo.
    pub fn platform(token: &str) -> Result<Self, IconResolutionError> {
        token
            .parse::<PlatformName>()
            .map(Self::Platform)
            .map_err(|_| IconResolutionError::UnknownPlatform {
                platform: token.to_string(),
            })
    }

    /// Identifier before alias normalization.
    pub fn identifier(&self) -> String {
        match self {
            Self::Name(name) => name.clone(),
            Self::Platform(platform) => platform.icon_name().to_string(),
            Self::Kpi(name) | Self::App(name) => {
                if name.is_empty() {
                    String::new()
                } else {
                    fa_identifier(name)
                }
            }
        }
    }
}

impl From<PlatformName> for IconRef {
    fn from(value: PlatformName) -> Self {
        Self::Platform(value)
    }
}

impl From<&str> for IconRef {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for IconRef {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

/// Everything resolution needs to know about one icon usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    /// Requested icon.
    pub icon: IconRef,
    /// Explicit style; wins over every other style input.
    pub style: Option<IconStyle>,
    /// Solid variant requested.
    pub solid: bool,
    /// Active state; renders solid like `solid`.
    pub active: bool,
    /// Interaction role.
    pub icon_type: IconType,
}

impl IconRequest {
    /// Static, light request for `icon`.
    pub fn new(icon: IconRef) -> Self {
        Self {
            icon,
            style: None,
            solid: false,
            active: false,
            icon_type: IconType::Static,
        }
    }

    /// Sets the interaction role.
    pub fn with_icon_type(mut self, icon_type: IconType) -> Self {
        self.icon_type = icon_type;
        self
    }

    /// Sets the solid flag.
    pub fn with_solid(mut self, solid: bool) -> Self {
        self.solid = solid;
        self
    }

    /// Sets the explicit style.
    pub fn with_style(mut self, style: IconStyle) -> Self {
        self.style = Some(style);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the vector content for one variant comes from.
pub enum IconSource {
    /// Precompiled inline path data.
    Inline(IconData),
    /// Markup must be fetched from the asset URL.
    Remote {
        /// Public asset path.
        url: String,
        /// viewBox width.
        width: u32,
        /// viewBox height.
        height: u32,
    },
}

impl IconSource {
    fn from_table(table: &IconDataTable, name: &str, style: IconStyle) -> Self {
        match table.lookup(name, style) {
            Some(data) => Self::Inline(data.clone()),
            None => {
                let (width, height) = table
                    .lookup_any(name, style)
                    .map(|data| (data.width, data.height))
                    .unwrap_or((DEFAULT_VIEWBOX_EDGE, DEFAULT_VIEWBOX_EDGE));
                Self::Remote {
                    url: icon_path(name, style),
                    width,
                    height,
                }
            }
        }
    }

    /// viewBox dimensions.
    pub fn view_box(&self) -> (u32, u32) {
        match self {
            Self::Inline(data) => (data.width, data.height),
            Self::Remote { width, height, .. } => (*width, *height),
        }
    }

    /// Inline path data, if any.
    pub fn inline_path(&self) -> Option<&str> {
        match self {
            Self::Inline(data) => Some(data.path.as_str()),
            Self::Remote { .. } => None,
        }
    }

    /// Asset URL for remote sources.
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            Self::Inline(_) => None,
            Self::Remote { url, .. } => Some(url.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved non-critical icon.
pub struct StandardIcon {
    /// Canonical identifier without a `Light` marker.
    pub name: String,
    /// Final style after explicit/solid/default precedence.
    pub style: IconStyle,
    /// Interaction role.
    pub icon_type: IconType,
    /// Default-state content (light for button icons).
    pub primary: IconSource,
    /// Hover-state content for button icons.
    pub hover: Option<IconSource>,
}

impl StandardIcon {
    /// viewBox of the default-state content.
    pub fn view_box(&self) -> (u32, u32) {
        self.primary.view_box()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of resolving one [`IconRequest`].
pub enum ResolvedIcon {
    /// Button use of a glyph with embedded light/solid paths.
    Critical(&'static CriticalGlyph),
    /// Everything else.
    Standard(StandardIcon),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Why a request could not be resolved to an asset.
pub enum IconResolutionError {
    /// No name was supplied.
    #[error("icon reference is empty")]
    EmptyName,
    /// Platform token has no logo.
    #[error("unknown platform name: {platform}")]
    UnknownPlatform {
        /// Offending token.
        platform: String,
    },
    /// Name cannot be turned into an asset path.
    #[error("icon `{name}` cannot be resolved to an asset path")]
    Unresolvable {
        /// Offending name.
        name: String,
    },
}

/// Style implied by the name alone: a `Light` marker, a brand logo, or the name prefix.
pub fn default_style_for(name: &str) -> IconStyle {
    let (stem, has_light_marker) = split_light_suffix(name);
    if has_light_marker {
        return IconStyle::Light;
    }
    if is_brand_icon(&icon_asset_stem(stem)) {
        return IconStyle::Brands;
    }
    style_from_prefix(icon_prefix(stem))
}

/// Final style: explicit style, then `solid`/`active`, then the name default.
pub fn final_style(request: &IconRequest, name: &str) -> IconStyle {
    if let Some(style) = request.style {
        return style;
    }
    if request.solid || request.active {
        return IconStyle::Solid;
    }
    default_style_for(name)
}

fn canonical_identifier(stem: &str) -> String {
    if icon_prefix(stem).token() == "fa" {
        return stem.to_string();
    }
    // Explicit style prefixes are folded into the generic prefix for data lookup.
    format!("fa{}", &stem[3..])
}

fn is_path_safe(stem: &str) -> bool {
    !stem.is_empty()
        && stem
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}

/// Resolves a request against a data table.
///
/// # Errors
///
/// Returns [`IconResolutionError::EmptyName`] when no name was supplied and
/// [`IconResolutionError::Unresolvable`] when the name cannot form an asset path.
pub fn resolve_icon(
    request: &IconRequest,
    table: &IconDataTable,
) -> Result<ResolvedIcon, IconResolutionError> {
    let raw = request.icon.identifier();
    if raw.trim().is_empty() {
        return Err(IconResolutionError::EmptyName);
    }
    let normalized = normalize_icon_name(&raw);

    if request.icon_type == IconType::Button {
        if let Some(glyph) = critical_glyph(normalized) {
            return Ok(ResolvedIcon::Critical(glyph));
        }
    }

    let style = final_style(request, normalized);
    let (stem, _) = split_light_suffix(normalized);
    if !is_path_safe(&icon_asset_stem(stem)) {
        return Err(IconResolutionError::Unresolvable {
            name: normalized.to_string(),
        });
    }
    let name = canonical_identifier(stem);

    let (primary, hover) = match request.icon_type {
        IconType::Button if style == IconStyle::Brands => {
            let source = IconSource::from_table(table, &name, style);
            (source.clone(), Some(source))
        }
        IconType::Button => {
            let light = IconSource::from_table(table, &name, IconStyle::Light);
            let solid = IconSource::from_table(table, &name, IconStyle::Solid);
            (light, Some(solid))
        }
        IconType::Static => (IconSource::from_table(table, &name, style), None),
    };

    Ok(ResolvedIcon::Standard(StandardIcon {
        name,
        style,
        icon_type: request.icon_type,
        primary,
        hover,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn table() -> IconDataTable {
        IconDataTable::from_entries([
            (
                "faBell".to_string(),
                IconData {
                    width: 448,
                    height: 512,
                    path: "M1 1".into(),
                    url: None,
                },
            ),
            (
                "faBellLight".to_string(),
                IconData {
                    width: 448,
                    height: 512,
                    path: "M2 2".into(),
                    url: None,
                },
            ),
        ])
    }

    fn standard(resolved: ResolvedIcon) -> StandardIcon {
        match resolved {
            ResolvedIcon::Standard(icon) => icon,
            ResolvedIcon::Critical(glyph) => panic!("unexpected critical glyph {}", glyph.name),
        }
    }

    #[test]
    fn references_produce_fontawesome_identifiers() {
        assert_eq!(IconRef::name("edit").identifier(), "edit");
        assert_eq!(
            IconRef::Platform(PlatformName::X).identifier(),
            "faXTwitter"
        );
        assert_eq!(
            IconRef::Kpi("brandAwareness".into()).identifier(),
            "faBrandAwareness"
        );
        assert_eq!(IconRef::App("brand-lift".into()).identifier(), "faBrandLift");
        assert_eq!(
            IconRef::platform("myspace"),
            Err(IconResolutionError::UnknownPlatform {
                platform: "myspace".into()
            })
        );
    }

    #[test]
    fn explicit_style_beats_solid_and_name_default() {
        let request = IconRequest::new(IconRef::name("faBell"))
            .with_solid(true)
            .with_style(IconStyle::Regular);
        assert_eq!(final_style(&request, "faBell"), IconStyle::Regular);

        let mut active = IconRequest::new(IconRef::name("faBell"));
        active.active = true;
        assert_eq!(final_style(&active, "faBell"), IconStyle::Solid);

        let plain = IconRequest::new(IconRef::name("fasBell"));
        assert_eq!(final_style(&plain, "fasBell"), IconStyle::Solid);
        assert_eq!(default_style_for("faBell"), IconStyle::Light);
        assert_eq!(default_style_for("faFacebook"), IconStyle::Brands);
        assert_eq!(default_style_for("fasBellLight"), IconStyle::Light);
    }

    #[test]
    fn static_icon_uses_light_key_unless_solid() {
        let light = standard(
            resolve_icon(&IconRequest::new(IconRef::name("faBell")), &table()).expect("resolve"),
        );
        assert_eq!(light.primary.inline_path(), Some("M2 2"));
        assert_eq!(light.hover, None);

        let solid = standard(
            resolve_icon(
                &IconRequest::new(IconRef::name("fasBell")),
                &table(),
            )
            .expect("resolve"),
        );
        assert_eq!(solid.name, "faBell");
        assert_eq!(solid.primary.inline_path(), Some("M1 1"));
    }

    #[test]
    fn button_icon_pairs_light_default_with_solid_hover() {
        let icon = standard(
            resolve_icon(
                &IconRequest::new(IconRef::name("faBell")).with_icon_type(IconType::Button),
                &table(),
            )
            .expect("resolve"),
        );
        assert_eq!(icon.primary.inline_path(), Some("M2 2"));
        assert_eq!(
            icon.hover.as_ref().and_then(IconSource::inline_path),
            Some("M1 1")
        );
        assert_eq!(icon.view_box(), (448, 512));
    }

    #[test]
    fn regular_requests_never_borrow_solid_data() {
        let solid_only = IconDataTable::from_entries([(
            "faBell".to_string(),
            IconData {
                width: 448,
                height: 512,
                path: "M1 1".into(),
                url: Some("/icons/solid/bell.svg".into()),
            },
        )]);
        let icon = standard(
            resolve_icon(&IconRequest::new(IconRef::name("farBell")), &solid_only)
                .expect("resolve"),
        );
        assert_eq!(icon.style, IconStyle::Regular);
        assert_eq!(
            icon.primary,
            IconSource::Remote {
                url: "/icons/regular/bell.svg".into(),
                width: 512,
                height: 512,
            }
        );

        let with_regular = IconDataTable::from_entries([(
            "faBellRegular".to_string(),
            IconData {
                width: 448,
                height: 512,
                path: "M3 3".into(),
                url: Some("/icons/regular/bell.svg".into()),
            },
        )]);
        let explicit = standard(
            resolve_icon(
                &IconRequest::new(IconRef::name("faBell")).with_style(IconStyle::Regular),
                &with_regular,
            )
            .expect("resolve"),
        );
        assert_eq!(explicit.primary.inline_path(), Some("M3 3"));
    }

    #[test]
    fn app_and_kpi_icons_find_generated_entries() {
        let generated = IconDataTable::from_entries([
            (
                "faBrandHealth".to_string(),
                IconData {
                    width: 512,
                    height: 512,
                    path: "M5 5".into(),
                    url: Some("/icons/app/brand-health.svg".into()),
                },
            ),
            (
                "faActionIntent".to_string(),
                IconData {
                    width: 640,
                    height: 512,
                    path: "M6 6".into(),
                    url: Some("/icons/kpis/action-intent.svg".into()),
                },
            ),
        ]);

        let app = standard(
            resolve_icon(
                &IconRequest::new(IconRef::App("brand-health".into())),
                &generated,
            )
            .expect("resolve"),
        );
        assert_eq!(app.style, IconStyle::Light);
        assert_eq!(app.primary.inline_path(), Some("M5 5"));

        let kpi_button = standard(
            resolve_icon(
                &IconRequest::new(IconRef::Kpi("actionIntent".into()))
                    .with_icon_type(IconType::Button),
                &generated,
            )
            .expect("resolve"),
        );
        assert_eq!(kpi_button.primary.inline_path(), Some("M6 6"));
        assert_eq!(
            kpi_button.hover.as_ref().and_then(IconSource::inline_path),
            Some("M6 6")
        );
        assert_eq!(kpi_button.view_box(), (640, 512));
    }

    #[test]
    fn missing_data_resolves_to_remote_asset() {
        let icon = standard(
            resolve_icon(&IconRequest::new(IconRef::name("user")), &table()).expect("resolve"),
        );
        assert_eq!(icon.name, "faUser");
        assert_eq!(
            icon.primary,
            IconSource::Remote {
                url: "/icons/light/user.svg".into(),
                width: 512,
                height: 512,
            }
        );
    }

    #[test]
    fn critical_names_bypass_lookup_only_for_buttons() {
        let button = IconRequest::new(IconRef::name("faEye")).with_icon_type(IconType::Button);
        match resolve_icon(&button, &table()).expect("resolve") {
            ResolvedIcon::Critical(glyph) => assert_eq!(glyph.width, 576),
            other => panic!("expected critical glyph, got {other:?}"),
        }

        let copy = IconRequest::new(IconRef::name("copy")).with_icon_type(IconType::Button);
        assert!(matches!(
            resolve_icon(&copy, &table()),
            Ok(ResolvedIcon::Critical(_))
        ));

        let static_eye = IconRequest::new(IconRef::name("faEye"));
        assert!(matches!(
            resolve_icon(&static_eye, &table()),
            Ok(ResolvedIcon::Standard(_))
        ));
    }

    #[test]
    fn brand_buttons_reuse_the_brand_asset_for_hover() {
        let icon = standard(
            resolve_icon(
                &IconRequest::new(IconRef::Platform(PlatformName::Facebook))
                    .with_icon_type(IconType::Button),
                &table(),
            )
            .expect("resolve"),
        );
        assert_eq!(icon.style, IconStyle::Brands);
        assert_eq!(icon.primary.remote_url(), Some("/icons/brands/facebook.svg"));
        assert_eq!(icon.hover.as_ref(), Some(&icon.primary));
    }

    #[test]
    fn empty_and_unsafe_names_are_errors() {
        assert_eq!(
            resolve_icon(&IconRequest::new(IconRef::name("  ")), &table()),
            Err(IconResolutionError::EmptyName)
        );
        assert_eq!(
            resolve_icon(&IconRequest::new(IconRef::Kpi(String::new())), &table()),
            Err(IconResolutionError::EmptyName)
        );
        assert_eq!(
            resolve_icon(&IconRequest::new(IconRef::name("../etc")), &table()),
            Err(IconResolutionError::Unresolvable {
                name: "../etc".into()
            })
        );
    }
}

//! Pure render plans: everything an icon `<svg>` needs, computed without a DOM.
//!
//! Components build an [`IconRenderPlan`] from a resolution result, the caller's
//! [`IconRenderOptions`], whether the element sits inside a `group` parent, and the state of any
//! pending asset fetches. The plan then produces the inner markup for a [`HoverState`], which keeps
//! the hover contract testable natively.

use icon_catalog::{
    IconResolutionError, IconSource, IconType, ResolvedIcon, StandardIcon, DEFAULT_VIEWBOX_EDGE,
    FALLBACK_ICON_PATH,
};
use platform_host::{IconHostServices, SvgContentLoader};

use super::classes::{
    icon_class_list, IconAction, IconSize, IconTransform, GROUP_HOVER_LIGHT_CLASS,
    GROUP_HOVER_SOLID_CLASS,
};
use super::safe::{safe_icon_markup, SafeIconOptions};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Pointer state of an icon rendered without a `group` parent.
pub enum HoverState {
    /// Pointer outside the icon.
    #[default]
    Idle,
    /// Pointer over the icon.
    Hovered,
}

impl From<bool> for HoverState {
    fn from(hovered: bool) -> Self {
        if hovered {
            Self::Hovered
        } else {
            Self::Idle
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Progress of fetching markup for an icon without precompiled path data.
pub enum RemoteMarkup {
    /// Fetch in flight; nothing is drawn yet.
    Pending,
    /// Inner markup of the fetched document.
    Ready(String),
    /// Fetch failed or is impossible here; the fallback glyph is drawn.
    Unavailable,
}

impl RemoteMarkup {
    /// Synchronous state for `url`: cached markup, pending when a fetch will follow, otherwise
    /// unavailable.
    pub fn initial(services: &IconHostServices, url: &str) -> Self {
        match services.loader().cached(&services.asset_url(url)) {
            Some(markup) => Self::Ready(markup),
            None if services.should_fetch() => Self::Pending,
            None => Self::Unavailable,
        }
    }

    /// Loads markup for `url`, degrading every failure to [`RemoteMarkup::Unavailable`].
    pub async fn load(loader: &SvgContentLoader, url: &str) -> Self {
        match loader.load(url).await {
            Ok(markup) => Self::Ready(markup),
            Err(err) => {
                leptos::logging::error!("[Icon System] {err}");
                Self::Unavailable
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Vector content of one icon variant.
pub enum IconLayer {
    /// A single path `d` attribute.
    Path(String),
    /// Fetched markup injected inside a `<g>`.
    Markup(String),
}

impl IconLayer {
    fn from_source(source: &IconSource, remote: &RemoteMarkup) -> Self {
        if let Some(path) = source.inline_path() {
            return Self::Path(path.to_string());
        }
        match remote {
            RemoteMarkup::Pending => Self::Path(String::new()),
            RemoteMarkup::Ready(markup) => Self::Markup(markup.clone()),
            RemoteMarkup::Unavailable => Self::fallback(),
        }
    }

    /// The question-mark glyph.
    pub fn fallback() -> Self {
        Self::Path(FALLBACK_ICON_PATH.to_string())
    }

    fn is_fallback(&self) -> bool {
        matches!(self, Self::Path(path) if path == FALLBACK_ICON_PATH)
    }

    /// Writes the layer into a viewBox of `view_box`.
    ///
    /// The fallback glyph is drawn on a 512x512 grid; inside any other viewBox it is wrapped in a
    /// nested `<svg>` that scales it to fit.
    fn write_markup(&self, class: Option<&str>, view_box: (u32, u32), out: &mut String) {
        let class_attr = class
            .map(|class| format!(r#" class="{}""#, escape_xml(class)))
            .unwrap_or_default();
        let fallback_edge = (DEFAULT_VIEWBOX_EDGE, DEFAULT_VIEWBOX_EDGE);
        match self {
            Self::Path(d) if self.is_fallback() && view_box != fallback_edge => {
                out.push_str(&format!(
                    r#"<svg x="0" y="0" width="{}" height="{}" viewBox="0 0 {edge} {edge}"{class_attr}><path d="{}"/></svg>"#,
                    view_box.0,
                    view_box.1,
                    escape_xml(d),
                    edge = DEFAULT_VIEWBOX_EDGE,
                ));
            }
            Self::Path(d) => {
                out.push_str(&format!(r#"<path d="{}"{class_attr}/>"#, escape_xml(d)));
            }
            Self::Markup(markup) => {
                out.push_str(&format!("<g{class_attr}>{markup}</g>"));
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// How the variants of an icon are laid out.
pub enum IconBody {
    /// Light and solid stacked; CSS `group-hover` swaps them.
    Stacked {
        /// Default-state content.
        light: IconLayer,
        /// Hover-state content.
        solid: IconLayer,
    },
    /// One visible variant at a time, swapped by pointer events.
    Swap {
        /// Content while idle.
        idle: IconLayer,
        /// Content while hovered.
        hovered: IconLayer,
    },
    /// A single variant.
    Single(IconLayer),
}

impl IconBody {
    fn layers(&self) -> [&IconLayer; 2] {
        match self {
            Self::Stacked { light, solid } => [light, solid],
            Self::Swap { idle, hovered } => [idle, hovered],
            Self::Single(layer) => [layer, layer],
        }
    }

    /// Whether every drawn layer is the fallback glyph.
    pub fn is_fallback_only(&self) -> bool {
        self.layers().iter().all(|layer| layer.is_fallback())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Caller-facing presentation options.
pub struct IconRenderOptions {
    /// Size token.
    pub size: IconSize,
    /// Hover color intent.
    pub action: IconAction,
    /// Animation and orientation.
    pub transform: IconTransform,
    /// Extra classes.
    pub class: String,
    /// Accessible title; `None` hides the icon from assistive technology.
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully computed rendering of one non-critical icon.
pub struct IconRenderPlan {
    /// viewBox width and height.
    pub view_box: (u32, u32),
    /// Class attribute of the `<svg>`.
    pub class: String,
    /// Accessible title.
    pub title: Option<String>,
    /// Variant layout.
    pub body: IconBody,
}

impl IconRenderPlan {
    /// Plan for the fallback glyph.
    pub fn fallback(options: &IconRenderOptions, icon_type: IconType) -> Self {
        Self {
            view_box: (DEFAULT_VIEWBOX_EDGE, DEFAULT_VIEWBOX_EDGE),
            class: options.class_list(icon_type),
            title: options.title.clone(),
            body: IconBody::Single(IconLayer::fallback()),
        }
    }

    /// Plan for a resolved standard icon.
    ///
    /// Button icons render stacked when the parent enables group hover and swap on pointer events
    /// otherwise. `primary` and `hover` carry fetch progress for remote variants.
    pub fn for_standard(
        icon: &StandardIcon,
        options: &IconRenderOptions,
        has_group_parent: bool,
        primary: &RemoteMarkup,
        hover: &RemoteMarkup,
    ) -> Self {
        let primary_layer = IconLayer::from_source(&icon.primary, primary);
        let body = match (&icon.hover, icon.icon_type) {
            (Some(source), IconType::Button) => {
                let hover_layer = IconLayer::from_source(source, hover);
                if has_group_parent {
                    IconBody::Stacked {
                        light: primary_layer,
                        solid: hover_layer,
                    }
                } else {
                    IconBody::Swap {
                        idle: primary_layer,
                        hovered: hover_layer,
                    }
                }
            }
            _ => IconBody::Single(primary_layer),
        };
        let view_box = if body.is_fallback_only() {
            (DEFAULT_VIEWBOX_EDGE, DEFAULT_VIEWBOX_EDGE)
        } else {
            icon.view_box()
        };
        Self {
            view_box,
            class: options.class_list(icon.icon_type),
            title: options.title.clone(),
            body,
        }
    }

    /// Plan for any resolution result; errors and critical glyphs degrade to the fallback plan.
    pub fn from_resolution(
        resolution: &Result<ResolvedIcon, IconResolutionError>,
        options: &IconRenderOptions,
        icon_type: IconType,
        has_group_parent: bool,
        primary: &RemoteMarkup,
        hover: &RemoteMarkup,
    ) -> Self {
        match resolution {
            Ok(ResolvedIcon::Standard(icon)) => {
                Self::for_standard(icon, options, has_group_parent, primary, hover)
            }
            Ok(ResolvedIcon::Critical(_)) | Err(_) => Self::fallback(options, icon_type),
        }
    }

    /// `viewBox` attribute value.
    pub fn view_box_attr(&self) -> String {
        format!("0 0 {} {}", self.view_box.0, self.view_box.1)
    }

    /// `role` attribute value.
    pub fn role(&self) -> &'static str {
        if self.title.is_some() {
            "img"
        } else {
            "presentation"
        }
    }

    /// `aria-hidden` attribute value.
    pub fn aria_hidden(&self) -> &'static str {
        if self.title.is_some() {
            "false"
        } else {
            "true"
        }
    }

    /// Whether hover is driven by pointer events rather than CSS.
    pub fn is_pointer_driven(&self) -> bool {
        matches!(self.body, IconBody::Swap { .. })
    }

    /// Inner markup for the idle state.
    pub fn to_inner_markup(&self) -> String {
        self.inner_markup_for(HoverState::Idle)
    }

    /// Inner markup for a pointer state.
    pub fn inner_markup_for(&self, hover: HoverState) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!("<title>{}</title>", escape_xml(title)));
        }
        match &self.body {
            IconBody::Stacked { light, solid } => {
                light.write_markup(Some(GROUP_HOVER_LIGHT_CLASS), self.view_box, &mut out);
                solid.write_markup(Some(GROUP_HOVER_SOLID_CLASS), self.view_box, &mut out);
            }
            IconBody::Swap { idle, hovered } => match hover {
                HoverState::Idle => idle.write_markup(None, self.view_box, &mut out),
                HoverState::Hovered => hovered.write_markup(None, self.view_box, &mut out),
            },
            IconBody::Single(layer) => layer.write_markup(None, self.view_box, &mut out),
        }
        out
    }

    /// Complete `<svg>` element.
    pub fn to_svg_markup(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{}" viewBox="{}" fill="currentColor" aria-hidden="{}" role="{}">{}</svg>"#,
            escape_xml(&self.class),
            self.view_box_attr(),
            self.aria_hidden(),
            self.role(),
            self.to_inner_markup()
        )
    }
}

impl IconRenderOptions {
    /// Class attribute for an icon of `icon_type`.
    pub fn class_list(&self, icon_type: IconType) -> String {
        icon_class_list(
            self.size,
            &self.transform,
            icon_type,
            self.action,
            &self.class,
        )
    }
}

/// Renders a resolution to a complete markup string without a DOM.
///
/// Remote variants use cached markup when present; otherwise they render empty while a fetch is
/// possible and fall back to the question-mark glyph when it is not. Server rendering assumes a
/// `group` parent.
pub fn render_icon_markup(
    resolution: &Result<ResolvedIcon, IconResolutionError>,
    options: &IconRenderOptions,
    icon_type: IconType,
    services: &IconHostServices,
) -> String {
    if let Ok(ResolvedIcon::Critical(glyph)) = resolution {
        return safe_icon_markup(
            Some(glyph),
            &SafeIconOptions::from_render_options(options, icon_type),
        );
    }
    let remote_state = |source: Option<&IconSource>| {
        source
            .and_then(IconSource::remote_url)
            .map(|url| RemoteMarkup::initial(services, url))
            .unwrap_or(RemoteMarkup::Unavailable)
    };
    let (primary, hover) = match resolution {
        Ok(ResolvedIcon::Standard(icon)) => (
            remote_state(Some(&icon.primary)),
            remote_state(icon.hover.as_ref()),
        ),
        _ => (RemoteMarkup::Unavailable, RemoteMarkup::Unavailable),
    };
    IconRenderPlan::from_resolution(resolution, options, icon_type, true, &primary, &hover)
        .to_svg_markup()
}

/// Escapes text for XML attribute values and character data.
pub(crate) fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

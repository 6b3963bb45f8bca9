//! Markup for critical glyphs rendered from embedded light/solid paths.

use icon_catalog::{
    critical::{SAFE_FALLBACK_PATH, SAFE_FALLBACK_VIEWBOX},
    CriticalGlyph, IconType,
};

use super::classes::{join_classes, IconAction, IconSize};
use super::render::{escape_xml, IconRenderOptions};

const LIGHT_LAYER_CLASS: &str = "absolute top-0 left-0 transition-opacity duration-200";
const SOLID_LAYER_CLASS: &str = "transition-opacity duration-200";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Presentation options of an embedded-glyph icon.
pub struct SafeIconOptions {
    /// Size token.
    pub size: IconSize,
    /// Color intent.
    pub action: IconAction,
    /// Interaction role.
    pub icon_type: IconType,
    /// Keep the solid variant visible.
    pub solid: bool,
    /// Accessible title.
    pub title: Option<String>,
    /// Extra classes on the wrapper.
    pub class: String,
}

impl SafeIconOptions {
    /// Options carried over from a standard render.
    pub fn from_render_options(options: &IconRenderOptions, icon_type: IconType) -> Self {
        Self {
            size: options.size,
            action: options.action,
            icon_type,
            solid: false,
            title: options.title.clone(),
            class: options.class.clone(),
        }
    }

    /// Wrapper `<div>` class.
    pub fn wrapper_class(&self) -> String {
        join_classes(["relative", self.class.as_str()])
    }

    fn light_hover_class(&self) -> &'static str {
        match (self.icon_type, self.solid) {
            (IconType::Static, _) => "",
            (IconType::Button, true) => "opacity-100",
            (IconType::Button, false) => "opacity-100 group-hover:opacity-0",
        }
    }

    fn solid_hover_class(&self) -> &'static str {
        match (self.icon_type, self.solid) {
            (IconType::Button, false) => "opacity-0 group-hover:opacity-100",
            _ => "",
        }
    }

    fn accessibility(&self) -> (&'static str, &'static str, String) {
        match &self.title {
            Some(title) => ("false", "img", format!("<title>{}</title>", escape_xml(title))),
            None => ("true", "presentation", String::new()),
        }
    }
}

/// Whether a glyph's variants are indistinguishable, which hides the hover swap.
pub fn has_identical_variants(glyph: &CriticalGlyph) -> bool {
    glyph.light_path == glyph.solid_path
}

fn svg_element(view_box: (u32, u32), class: &str, a11y: &str, inner: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" class="{}" fill="currentColor" {a11y}>{inner}</svg>"#,
        view_box.0,
        view_box.1,
        escape_xml(class),
    )
}

/// Inner markup of the wrapper: light and solid `<svg>`s, or the question glyph when `glyph` is
/// `None`.
pub fn safe_icon_inner_markup(glyph: Option<&CriticalGlyph>, options: &SafeIconOptions) -> String {
    let color = options.action.safe_color_classes(options.icon_type);
    let (aria_hidden, role, title) = options.accessibility();
    let a11y = format!(r#"aria-hidden="{aria_hidden}" role="{role}""#);

    let Some(glyph) = glyph else {
        let class = join_classes([options.size.classes(), color]);
        let inner = format!(r#"{title}<path d="{SAFE_FALLBACK_PATH}"/>"#);
        return svg_element(SAFE_FALLBACK_VIEWBOX, &class, &a11y, &inner);
    };

    let light_path = if glyph.light_path.is_empty() {
        glyph.solid_path
    } else {
        glyph.light_path
    };
    let solid_path = if glyph.solid_path.is_empty() {
        glyph.light_path
    } else {
        glyph.solid_path
    };
    let view_box = (glyph.width, glyph.height);

    let light_class = join_classes([
        options.size.classes(),
        color,
        LIGHT_LAYER_CLASS,
        options.light_hover_class(),
    ]);
    let solid_class = join_classes([
        options.size.classes(),
        color,
        SOLID_LAYER_CLASS,
        options.solid_hover_class(),
    ]);

    let mut out = svg_element(
        view_box,
        &light_class,
        &a11y,
        &format!(r#"{title}<path d="{}"/>"#, escape_xml(light_path)),
    );
    out.push_str(&svg_element(
        view_box,
        &solid_class,
        r#"aria-hidden="true""#,
        &format!(r#"<path d="{}"/>"#, escape_xml(solid_path)),
    ));
    out
}

/// Complete wrapper markup.
pub fn safe_icon_markup(glyph: Option<&CriticalGlyph>, options: &SafeIconOptions) -> String {
    format!(
        r#"<div class="{}">{}</div>"#,
        escape_xml(&options.wrapper_class()),
        safe_icon_inner_markup(glyph, options)
    )
}

#[cfg(test)]
mod tests {
    use icon_catalog::critical_glyph;
    use pretty_assertions::assert_eq;

    use super::*;

    fn button() -> SafeIconOptions {
        SafeIconOptions {
            icon_type: IconType::Button,
            ..SafeIconOptions::default()
        }
    }

    #[test]
    fn button_glyph_stacks_light_over_solid() {
        let glyph = critical_glyph("faEye").expect("critical");
        let markup = safe_icon_inner_markup(Some(glyph), &button());
        let svgs: Vec<&str> = markup.split("</svg>").filter(|s| !s.is_empty()).collect();
        assert_eq!(svgs.len(), 2);
        assert!(svgs[0].contains("viewBox=\"0 0 576 512\""));
        assert!(svgs[0].contains("opacity-100 group-hover:opacity-0"));
        assert!(svgs[0].contains(glyph.light_path));
        assert!(svgs[1].contains("opacity-0 group-hover:opacity-100"));
        assert!(svgs[1].contains(glyph.solid_path));
        assert!(svgs[1].contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn solid_request_pins_the_light_layer() {
        let glyph = critical_glyph("faCopy").expect("critical");
        let options = SafeIconOptions {
            solid: true,
            ..button()
        };
        let markup = safe_icon_inner_markup(Some(glyph), &options);
        assert!(!markup.contains("group-hover:opacity-0"));
        assert!(!markup.contains("opacity-0 group-hover:opacity-100"));
    }

    #[test]
    fn action_colors_and_wrapper_classes() {
        let glyph = critical_glyph("faTrashCan").expect("critical");
        let options = SafeIconOptions {
            action: IconAction::Delete,
            class: "ml-2".into(),
            title: Some("Delete".into()),
            ..button()
        };
        let markup = safe_icon_markup(Some(glyph), &options);
        assert!(markup.starts_with(r#"<div class="relative ml-2">"#));
        assert!(markup.contains("text-red-500 group-hover:text-red-600"));
        assert!(markup.contains(r#"role="img"><title>Delete</title>"#));
    }

    #[test]
    fn missing_glyph_draws_the_question_mark() {
        let markup = safe_icon_inner_markup(None, &SafeIconOptions::default());
        assert!(markup.contains(r#"viewBox="0 0 320 512""#));
        assert!(markup.contains(SAFE_FALLBACK_PATH));
        assert!(markup.contains("text-current"));
    }

    #[test]
    fn embedded_glyphs_have_distinct_variants() {
        for name in ["faPenToSquare", "faEdit", "faEye", "faCopy", "faTrashCan"] {
            let glyph = critical_glyph(name).expect("critical");
            assert!(!has_identical_variants(glyph), "{name}");
        }
    }
}

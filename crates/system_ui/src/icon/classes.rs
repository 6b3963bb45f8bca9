//! Utility-class vocabulary for icon sizing, hover colors and transforms.

use icon_catalog::IconType;

/// Class every rendered icon carries.
pub const BASE_ICON_CLASS: &str = "inline-block";

/// Color transition applied to button icons.
pub const BUTTON_TRANSITION_CLASS: &str = "transition-colors duration-200";

/// Classes of the light path in the two-path group-hover rendering.
pub const GROUP_HOVER_LIGHT_CLASS: &str = "group-hover:opacity-0 transition-opacity duration-200";

/// Classes of the solid path in the two-path group-hover rendering.
pub const GROUP_HOVER_SOLID_CLASS: &str =
    "opacity-0 group-hover:opacity-100 transition-opacity duration-200";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    #[default]
    Md,
    /// 24px.
    Lg,
    /// 32px.
    Xl,
    /// 40px.
    Xl2,
    /// 48px.
    Xl3,
    /// 64px.
    Xl4,
}

impl IconSize {
    /// Every size, smallest first.
    pub const ALL: [Self; 8] = [
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xl2,
        Self::Xl3,
        Self::Xl4,
    ];

    /// Stable size token used for data attributes and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
            Self::Xl3 => "3xl",
            Self::Xl4 => "4xl",
        }
    }

    /// Width and height utility classes.
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Xs => "w-3 h-3",
            Self::Sm => "w-4 h-4",
            Self::Md => "w-5 h-5",
            Self::Lg => "w-6 h-6",
            Self::Xl => "w-8 h-8",
            Self::Xl2 => "w-10 h-10",
            Self::Xl3 => "w-12 h-12",
            Self::Xl4 => "w-16 h-16",
        }
    }

    /// Parses a size token; unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.token() == token)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic action an interactive icon represents; drives hover coloring.
pub enum IconAction {
    /// Accent color on hover.
    #[default]
    Default,
    /// Destructive action.
    Delete,
    /// Cautionary action.
    Warning,
    /// Confirming action.
    Success,
}

impl IconAction {
    /// Stable token.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Delete => "delete",
            Self::Warning => "warning",
            Self::Success => "success",
        }
    }

    /// Group-hover text color for button icons.
    pub const fn hover_color_class(self) -> &'static str {
        match self {
            Self::Default => "group-hover:text-[var(--accent-color)]",
            Self::Delete => "group-hover:text-red-500",
            Self::Warning => "group-hover:text-yellow-500",
            Self::Success => "group-hover:text-green-500",
        }
    }

    /// Resting and hover colors of the embedded-glyph renderer.
    pub const fn safe_color_classes(self, icon_type: IconType) -> &'static str {
        match (self, icon_type) {
            (Self::Delete, _) => "text-red-500 group-hover:text-red-600",
            (Self::Warning, _) => "text-yellow-500 group-hover:text-yellow-600",
            (Self::Success, _) => "text-green-500 group-hover:text-green-600",
            (Self::Default, IconType::Button) => {
                "text-gray-500 group-hover:text-[var(--accent-color)]"
            }
            (Self::Default, IconType::Static) => "text-current",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Quarter-turn rotation.
pub enum IconRotation {
    /// Upright.
    #[default]
    None,
    /// 90 degrees clockwise.
    Deg90,
    /// 180 degrees.
    Deg180,
    /// 270 degrees clockwise.
    Deg270,
}

impl IconRotation {
    /// Rotation from a degree value; anything but 90/180/270 is upright.
    pub const fn from_degrees(degrees: u16) -> Self {
        match degrees {
            90 => Self::Deg90,
            180 => Self::Deg180,
            270 => Self::Deg270,
            _ => Self::None,
        }
    }

    const fn class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Deg90 => Some("rotate-90"),
            Self::Deg180 => Some("rotate-180"),
            Self::Deg270 => Some("rotate-270"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Animation and orientation modifiers.
pub struct IconTransform {
    /// Continuous rotation.
    pub spin: bool,
    /// Opacity pulse.
    pub pulse: bool,
    /// Mirror on the vertical axis.
    pub flip_horizontal: bool,
    /// Mirror on the horizontal axis.
    pub flip_vertical: bool,
    /// Static rotation.
    pub rotation: IconRotation,
}

impl IconTransform {
    /// Utility classes in application order.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.spin {
            classes.push("animate-spin");
        }
        if self.pulse {
            classes.push("animate-pulse");
        }
        match (self.flip_horizontal, self.flip_vertical) {
            (true, true) => classes.push("scale-x-[-1] scale-y-[-1]"),
            (true, false) => classes.push("scale-x-[-1]"),
            (false, true) => classes.push("scale-y-[-1]"),
            (false, false) => {}
        }
        classes.extend(self.rotation.class());
        classes
    }
}

/// Hover classes for one icon; static icons have none.
pub fn hover_classes(icon_type: IconType, action: IconAction) -> Option<String> {
    match icon_type {
        IconType::Static => None,
        IconType::Button => Some(format!(
            "{BUTTON_TRANSITION_CLASS} {}",
            action.hover_color_class()
        )),
    }
}

/// Joins class fragments, skipping blanks.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full class list of a rendered `<svg>`: base, size, transforms, hover, then caller classes.
pub fn icon_class_list(
    size: IconSize,
    transform: &IconTransform,
    icon_type: IconType,
    action: IconAction,
    extra: &str,
) -> String {
    let hover = hover_classes(icon_type, action);
    let mut parts = vec![BASE_ICON_CLASS, size.classes()];
    parts.extend(transform.classes());
    parts.extend(hover.as_deref());
    parts.push(extra);
    join_classes(parts)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn size_tokens_round_trip_and_map_to_tailwind() {
        for size in IconSize::ALL {
            assert_eq!(IconSize::from_token(size.token()), Some(size));
        }
        assert_eq!(IconSize::default().classes(), "w-5 h-5");
        assert_eq!(IconSize::Xl4.classes(), "w-16 h-16");
        assert_eq!(IconSize::from_token("5xl"), None);
    }

    #[test]
    fn static_icons_get_base_size_and_caller_classes() {
        assert_eq!(
            icon_class_list(
                IconSize::Sm,
                &IconTransform::default(),
                IconType::Static,
                IconAction::Delete,
                " text-muted ",
            ),
            "inline-block w-4 h-4 text-muted"
        );
    }

    #[test]
    fn button_icons_add_action_hover_color() {
        assert_eq!(
            icon_class_list(
                IconSize::Md,
                &IconTransform::default(),
                IconType::Button,
                IconAction::Warning,
                "",
            ),
            "inline-block w-5 h-5 transition-colors duration-200 group-hover:text-yellow-500"
        );
    }

    #[test]
    fn transforms_combine_flips_and_ignore_odd_rotations() {
        let transform = IconTransform {
            spin: true,
            flip_horizontal: true,
            flip_vertical: true,
            rotation: IconRotation::from_degrees(180),
            ..IconTransform::default()
        };
        assert_eq!(
            transform.classes(),
            vec!["animate-spin", "scale-x-[-1] scale-y-[-1]", "rotate-180"]
        );
        assert_eq!(IconRotation::from_degrees(45), IconRotation::None);
    }

    #[test]
    fn safe_colors_depend_on_action_and_role() {
        assert_eq!(
            IconAction::Default.safe_color_classes(IconType::Static),
            "text-current"
        );
        assert_eq!(
            IconAction::Default.safe_color_classes(IconType::Button),
            "text-gray-500 group-hover:text-[var(--accent-color)]"
        );
        assert_eq!(
            IconAction::Delete.safe_color_classes(IconType::Static),
            "text-red-500 group-hover:text-red-600"
        );
    }
}

//! DOM inspection helpers used by icon validation and hover wiring.

use crate::bridge;

/// Class an ancestor must carry for CSS `group-hover:` utilities to apply.
pub const HOVER_GROUP_CLASS: &str = "group";

/// Whether the parent of `element` carries `class`.
///
/// Native builds have no DOM and always answer `true`.
pub fn parent_has_class(element: &web_sys::Element, class: &str) -> bool {
    bridge::parent_has_class(element, class)
}

/// Whether the parent of `element` enables CSS group hover.
pub fn parent_has_hover_group(element: &web_sys::Element) -> bool {
    parent_has_class(element, HOVER_GROUP_CLASS)
}

//! Icon components, class computation and pure render plans.

mod classes;
mod components;
mod render;
mod safe;
mod services;
mod validation;

pub use classes::{
    hover_classes, icon_class_list, join_classes, IconAction, IconRotation, IconSize,
    IconTransform, BASE_ICON_CLASS, BUTTON_TRANSITION_CLASS, GROUP_HOVER_LIGHT_CLASS,
    GROUP_HOVER_SOLID_CLASS,
};
pub use components::{Icon, PlatformIcon, SafeIcon, SvgIcon};
pub use render::{
    render_icon_markup, HoverState, IconBody, IconLayer, IconRenderOptions, IconRenderPlan,
    RemoteMarkup,
};
pub use safe::{has_identical_variants, safe_icon_inner_markup, safe_icon_markup, SafeIconOptions};
pub use services::{provide_icon_services, use_icon_services, IconServicesProvider};
pub use validation::{
    use_button_icon_validation, use_group_parent, use_icon_validation,
    use_icon_validation_development,
};

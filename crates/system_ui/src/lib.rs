//! Icon UI layer for Leptos applications.
//!
//! The crate owns the icon components ([`SvgIcon`], [`Icon`], [`PlatformIcon`], [`SafeIcon`]),
//! the utility-class vocabulary they emit, pure render plans that produce icon markup without a
//! DOM, and the development-time validation hooks. Name resolution lives in `icon_catalog`; asset
//! loading goes through the `platform_host` services provided with [`IconServicesProvider`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;

pub use icon::{
    has_identical_variants, hover_classes, icon_class_list, join_classes, provide_icon_services,
    render_icon_markup, safe_icon_inner_markup, safe_icon_markup, use_button_icon_validation,
    use_group_parent, use_icon_services, use_icon_validation, use_icon_validation_development,
    HoverState, Icon, IconAction, IconBody, IconLayer, IconRenderOptions, IconRenderPlan,
    IconRotation, IconServicesProvider, IconSize, IconTransform, PlatformIcon, RemoteMarkup,
    SafeIcon, SafeIconOptions, SvgIcon, BASE_ICON_CLASS, BUTTON_TRANSITION_CLASS,
    GROUP_HOVER_LIGHT_CLASS, GROUP_HOVER_SOLID_CLASS,
};
pub use icon_catalog::{IconRef, IconStyle, IconType, PlatformName};

/// Convenience imports for application crates rendering icons.
pub mod prelude {
    pub use crate::{
        Icon, IconAction, IconRef, IconServicesProvider, IconSize, IconStyle, IconTransform,
        IconType, PlatformIcon, PlatformName, SafeIcon, SvgIcon,
    };
}

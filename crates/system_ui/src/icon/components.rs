//! Leptos icon components.

use icon_catalog::{
    critical_glyph, normalize_icon_name, resolve_icon, IconRef, IconRequest, IconSource,
    IconStyle, IconType, IconUsage, PlatformName, ResolvedIcon,
};
use leptos::ev::MouseEvent;
use leptos::*;
use platform_host::IconHostServices;

use super::classes::{IconAction, IconRotation, IconSize, IconTransform};
use super::render::{HoverState, IconRenderOptions, IconRenderPlan, RemoteMarkup};
use super::safe::{has_identical_variants, safe_icon_inner_markup, SafeIconOptions};
use super::services::use_icon_services;
use super::validation::{
    use_button_icon_validation, use_group_parent, use_icon_validation_development,
};

/// Markup state for a remote source, fetching in the background when needed.
fn remote_markup_signal(
    services: &IconHostServices,
    source: Option<&IconSource>,
) -> RwSignal<RemoteMarkup> {
    let Some(url) = source.and_then(IconSource::remote_url) else {
        return create_rw_signal(RemoteMarkup::Unavailable);
    };
    let state = create_rw_signal(RemoteMarkup::initial(services, url));
    if state.get_untracked() == RemoteMarkup::Pending {
        let loader = services.loader();
        let url = services.asset_url(url);
        spawn_local(async move {
            let outcome = RemoteMarkup::load(&loader, &url).await;
            // The icon may have unmounted while the fetch was in flight.
            let _ = state.try_set(outcome);
        });
    }
    state
}

#[component]
/// Renders one icon from a name, platform, KPI or app reference.
///
/// Button uses of critical glyphs render through [`SafeIcon`]. Any resolution or loading failure
/// renders the question-mark fallback instead of propagating.
pub fn SvgIcon(
    /// What to render.
    #[prop(into)]
    icon: IconRef,
    #[prop(optional)] size: IconSize,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// Interaction role; button icons swap light to solid on hover.
    #[prop(optional)]
    icon_type: IconType,
    #[prop(optional)] active: bool,
    #[prop(optional)] solid: bool,
    /// Explicit style, overriding `solid`/`active` and the name default.
    #[prop(optional)]
    style: Option<IconStyle>,
    /// Accessible title; untitled icons are hidden from assistive technology.
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)] action: IconAction,
    #[prop(optional)] spin: bool,
    #[prop(optional)] pulse: bool,
    #[prop(optional)] flip_horizontal: bool,
    #[prop(optional)] flip_vertical: bool,
    #[prop(optional)] rotation: IconRotation,
    #[prop(default = None, into)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let services = use_icon_services();
    let identifier = icon.identifier();
    let request = IconRequest {
        icon,
        style,
        solid,
        active,
        icon_type,
    };
    let resolution = resolve_icon(&request, &services.icon_data);

    if let Ok(ResolvedIcon::Critical(glyph)) = &resolution {
        return view! {
            <SafeIcon
                icon=glyph.name
                class=class
                solid=solid
                icon_type=icon_type
                size=size
                action=action
                title=title
            />
        }
        .into_view();
    }
    if let Err(err) = &resolution {
        logging::warn!("[Icon System] {err}; rendering fallback glyph");
    }

    let node_ref = create_node_ref::<svg::Svg>();
    let development = services.config.build_mode.is_development();
    if development {
        use_icon_validation_development(&IconUsage {
            name: normalize_icon_name(&identifier).to_string(),
            solid,
            icon_type,
            class: class.get().unwrap_or_default(),
        });
        use_button_icon_validation(node_ref, icon_type);
    }

    let has_group = if icon_type == IconType::Button {
        use_group_parent(node_ref)
    } else {
        Signal::derive(|| true)
    };
    if development && icon_type == IconType::Button {
        let name = identifier.clone();
        create_effect(move |_| {
            if !has_group.get() {
                logging::debug_warn!(
                    "[Icon System] Button icon \"{name}\" missing parent 'group' class. Using fallback rendering."
                );
            }
        });
    }

    let standard = match &resolution {
        Ok(ResolvedIcon::Standard(icon)) => Some(icon),
        _ => None,
    };
    let primary = remote_markup_signal(&services, standard.map(|icon| &icon.primary));
    let shares_source = standard
        .map(|icon| icon.hover.as_ref() == Some(&icon.primary))
        .unwrap_or(false);
    let hover = if shares_source {
        primary
    } else {
        remote_markup_signal(&services, standard.and_then(|icon| icon.hover.as_ref()))
    };

    let transform = IconTransform {
        spin,
        pulse,
        flip_horizontal,
        flip_vertical,
        rotation,
    };
    let plan = create_memo(move |_| {
        let options = IconRenderOptions {
            size,
            action,
            transform,
            class: class.get().unwrap_or_default(),
            title: title.get(),
        };
        IconRenderPlan::from_resolution(
            &resolution,
            &options,
            icon_type,
            has_group.get(),
            &primary.get(),
            &hover.get(),
        )
    });
    let hovered = create_rw_signal(false);

    view! {
        <svg
            node_ref=node_ref
            class=move || plan.with(|plan| plan.class.clone())
            xmlns="http://www.w3.org/2000/svg"
            viewBox=move || plan.with(IconRenderPlan::view_box_attr)
            fill="currentColor"
            aria-hidden=move || plan.with(IconRenderPlan::aria_hidden)
            role=move || plan.with(IconRenderPlan::role)
            data-icon=identifier
            data-icon-type=icon_type.token()
            data-size=size.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:mouseenter=move |_| {
                if plan.with_untracked(IconRenderPlan::is_pointer_driven) {
                    hovered.set(true);
                }
            }
            on:mouseleave=move |_| hovered.set(false)
            inner_html=move || {
                let state = HoverState::from(hovered.get());
                plan.with(|plan| plan.inner_markup_for(state))
            }
        />
    }
    .into_view()
}

#[component]
/// Renders a critical glyph from its embedded light and solid paths.
///
/// Unknown names render the question-mark glyph.
pub fn SafeIcon(
    /// Critical glyph name, e.g. `faTrashCan`.
    #[prop(into)]
    icon: String,
    #[prop(optional, into)] class: MaybeProp<String>,
    /// Keep the solid variant visible instead of swapping on hover.
    #[prop(optional)]
    solid: bool,
    #[prop(optional)] icon_type: IconType,
    #[prop(optional)] size: IconSize,
    #[prop(optional)] action: IconAction,
    #[prop(optional, into)] title: MaybeProp<String>,
) -> impl IntoView {
    let services = use_icon_services();
    let glyph = critical_glyph(&icon);
    if services.config.build_mode.is_development() {
        match glyph {
            Some(glyph) if has_identical_variants(glyph) => logging::warn!(
                "[SafeIcon] Icon {icon} has identical light and solid paths. Hover effect won't be visible."
            ),
            None => logging::debug_warn!("[SafeIcon] no embedded glyph for {icon}; rendering fallback"),
            Some(_) => {}
        }
    }

    let options = create_memo(move |_| SafeIconOptions {
        size,
        action,
        icon_type,
        solid,
        title: title.get(),
        class: class.get().unwrap_or_default(),
    });

    view! {
        <div
            class=move || options.with(SafeIconOptions::wrapper_class)
            data-icon-name=icon
            data-icon-type=icon_type.token()
            inner_html=move || options.with(|options| safe_icon_inner_markup(glyph, options))
        />
    }
}

#[component]
/// Renders the logo of a social platform.
///
/// Unknown platform tokens log a warning and render nothing.
pub fn PlatformIcon(
    /// Platform token: `facebook`, `instagram`, `linkedin`, `tiktok`, `youtube` or `x`.
    #[prop(into)]
    platform: String,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional)] size: IconSize,
    #[prop(default = None, into)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    match platform.parse::<PlatformName>() {
        Ok(platform) => view! {
            <SvgIcon icon=platform class=class size=size on_click=on_click />
        }
        .into_view(),
        Err(_) => {
            logging::warn!("Unknown platform name: {platform}");
            ().into_view()
        }
    }
}

#[component]
/// Name-based icon entry point for application code.
///
/// `name` wins over `kpi`, which wins over `app`. Without any reference the fallback glyph renders.
pub fn Icon(
    #[prop(optional, into)] name: Option<String>,
    /// KPI identifier such as `actionIntent`.
    #[prop(optional, into)]
    kpi: Option<String>,
    /// App section identifier such as `brand-health`.
    #[prop(optional, into)]
    app: Option<String>,
    #[prop(optional)] size: IconSize,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional)] solid: bool,
    #[prop(optional)] active: bool,
    #[prop(optional)] icon_type: IconType,
    #[prop(optional)] action: IconAction,
    #[prop(optional, into)] title: MaybeProp<String>,
) -> impl IntoView {
    let icon = match (name, kpi, app) {
        (Some(name), _, _) => IconRef::Name(name),
        (None, Some(kpi), _) => IconRef::Kpi(kpi),
        (None, None, Some(app)) => IconRef::App(app),
        (None, None, None) => IconRef::Name(String::new()),
    };
    view! {
        <SvgIcon
            icon=icon
            size=size
            class=class
            solid=solid
            active=active
            icon_type=icon_type
            action=action
            title=title
        />
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use icon_catalog::{IconData, IconDataTable};
    use platform_host::{IconHostConfig, MemorySvgMarkupCache, StaticSvgAssetFetcher, SvgMarkupCache};
    use pretty_assertions::assert_eq;

    use super::*;

    fn remote() -> IconSource {
        IconSource::Remote {
            url: "/icons/light/gear.svg".into(),
            width: 512,
            height: 512,
        }
    }

    #[test]
    fn unknown_platform_renders_nothing() {
        let runtime = create_runtime();
        let view = PlatformIcon(
            PlatformIconProps::builder()
                .platform("myspace")
                .size(IconSize::Lg)
                .build(),
        )
        .into_view();
        assert!(matches!(view, View::CoreComponent(leptos::leptos_dom::CoreComponent::Unit(_))));
        runtime.dispose();
    }

    #[test]
    fn inline_and_absent_sources_need_no_fetch() {
        let runtime = create_runtime();
        let services = IconHostServices::default();
        let inline = IconSource::Inline(IconData::fallback());
        assert_eq!(
            remote_markup_signal(&services, Some(&inline)).get_untracked(),
            RemoteMarkup::Unavailable
        );
        assert_eq!(
            remote_markup_signal(&services, None).get_untracked(),
            RemoteMarkup::Unavailable
        );
        runtime.dispose();
    }

    #[test]
    fn server_rendering_never_waits_on_remote_markup() {
        let runtime = create_runtime();
        let services = IconHostServices::default().with_icon_data(IconDataTable::default());
        assert_eq!(
            remote_markup_signal(&services, Some(&remote())).get_untracked(),
            RemoteMarkup::Unavailable
        );
        runtime.dispose();
    }

    #[test]
    fn cached_markup_is_used_synchronously() {
        let runtime = create_runtime();
        let cache = MemorySvgMarkupCache::default();
        cache.put(
            &platform_host::svg_cache_key("/icons/light/gear.svg"),
            r#"<path d="M3 3"/>"#,
        );
        let services = IconHostServices::browser(
            IconHostConfig::default(),
            Rc::new(StaticSvgAssetFetcher::new()),
        )
        .with_svg_cache(Rc::new(cache));
        assert_eq!(
            remote_markup_signal(&services, Some(&remote())).get_untracked(),
            RemoteMarkup::Ready(r#"<path d="M3 3"/>"#.into())
        );
        runtime.dispose();
    }
}

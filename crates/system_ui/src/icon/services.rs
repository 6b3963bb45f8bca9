//! Icon host services shared through the Leptos context.

use leptos::*;
use platform_host::{IconHostConfig, IconHostServices};

/// Makes `services` available to every icon below the current owner.
pub fn provide_icon_services(services: IconHostServices) {
    provide_context(services);
}

/// Returns the provided [`IconHostServices`], or a server bundle when none was provided.
pub fn use_icon_services() -> IconHostServices {
    use_context::<IconHostServices>().unwrap_or_else(|| {
        logging::debug_warn!("[Icon System] no icon services provided; using server defaults");
        IconHostServices::default()
    })
}

#[component]
/// Provides environment-appropriate icon services to its children.
pub fn IconServicesProvider(
    /// Runtime configuration; defaults apply when omitted.
    #[prop(optional)]
    config: Option<IconHostConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let services = platform_host_web::build_icon_host_services(config);
    provide_icon_services(services);
    children().into_view()
}

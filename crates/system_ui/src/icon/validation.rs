//! Development-time icon usage checks. Advisory only; rendering never depends on them.

use icon_catalog::{validate_icon_usage_with, IconType, IconUsage, IconValidationIssue};
use leptos::*;
use platform_host::IconHostServices;

use super::services::use_icon_services;

fn report_issues(services: &IconHostServices, usage: &IconUsage) -> Vec<IconValidationIssue> {
    let issues = validate_icon_usage_with(&services.validation, usage);
    for issue in &issues {
        logging::warn!("[Icon System] {issue}");
    }
    issues
}

/// Validates one usage and logs every finding.
pub fn use_icon_validation(usage: &IconUsage) -> Vec<IconValidationIssue> {
    report_issues(&use_icon_services(), usage)
}

/// [`use_icon_validation`] in development builds; inert in production.
pub fn use_icon_validation_development(usage: &IconUsage) -> Vec<IconValidationIssue> {
    development_issues(&use_icon_services(), usage)
}

fn development_issues(services: &IconHostServices, usage: &IconUsage) -> Vec<IconValidationIssue> {
    if !services.config.build_mode.is_development() {
        return Vec::new();
    }
    report_issues(services, usage)
}

/// Tracks whether the element's parent enables CSS group hover.
///
/// Starts `true` and is corrected once the element mounts, so server output assumes a `group`
/// parent.
pub fn use_group_parent(node_ref: NodeRef<svg::Svg>) -> Signal<bool> {
    let has_group = create_rw_signal(true);
    create_effect(move |_| {
        if let Some(element) = node_ref.get() {
            let element: &web_sys::Element = &element;
            has_group.set(platform_host_web::parent_has_hover_group(element));
        }
    });
    has_group.into()
}

/// Checks that a button icon sits inside a `group` parent.
///
/// Only active for button icons in development browser builds; everywhere else the signal stays
/// `true`.
pub fn use_button_icon_validation(node_ref: NodeRef<svg::Svg>, icon_type: IconType) -> Signal<bool> {
    let services = use_icon_services();
    if icon_type != IconType::Button
        || !services.config.build_mode.is_development()
        || !services.environment.is_browser()
    {
        return Signal::derive(|| true);
    }
    let has_group = use_group_parent(node_ref);
    create_effect(move |_| {
        if !has_group.get() {
            logging::warn!(
                "[Icon System] button icon parent lacks the `group` class; group-hover styles will not apply"
            );
        }
    });
    has_group
}

#[cfg(test)]
mod tests {
    use platform_host::{BuildMode, IconHostConfig};
    use pretty_assertions::assert_eq;

    use super::*;

    fn services_for(build_mode: BuildMode) -> IconHostServices {
        IconHostServices::server(IconHostConfig {
            build_mode,
            ..IconHostConfig::default()
        })
    }

    fn usage(name: &str, icon_type: IconType, solid: bool) -> IconUsage {
        IconUsage {
            name: name.into(),
            solid,
            icon_type,
            class: String::new(),
        }
    }

    #[test]
    fn development_validation_reports_and_memoizes() {
        let services = services_for(BuildMode::Development);

        let issues = development_issues(&services, &usage("Bad Name", IconType::Button, true));
        assert_eq!(
            issues,
            vec![
                IconValidationIssue::InvalidName {
                    name: "Bad Name".into()
                },
                IconValidationIssue::SolidButton {
                    name: "Bad Name".into()
                },
            ]
        );
        let evaluations = services.validation.pattern_evaluations();
        report_issues(&services, &usage("Bad Name", IconType::Static, false));
        assert_eq!(services.validation.pattern_evaluations(), evaluations);
    }

    #[test]
    fn production_validation_is_inert() {
        let services = services_for(BuildMode::Production);
        assert!(development_issues(&services, &usage("Bad Name", IconType::Button, true)).is_empty());
        assert!(services.validation.is_empty());
    }

    #[test]
    fn button_validation_is_optimistic_off_browser() {
        let runtime = create_runtime();
        let node_ref = create_node_ref::<svg::Svg>();
        let has_group = use_button_icon_validation(node_ref, IconType::Button);
        assert!(has_group.get_untracked());
        runtime.dispose();
    }
}

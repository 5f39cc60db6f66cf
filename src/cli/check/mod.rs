//! `sitecfg check`: validate the configuration.
//!
//! Always runs the structural checks (labels, link shapes, empty sidebar
//! groups, social URLs). With `--content`, internal routes are also resolved
//! against the content directory.

mod report;

use report::RouteReport;

use crate::{
    cli::CheckArgs,
    config::{ConfigError, LinkKind, NavItem, SiteConfig},
    log,
    utils::{path::normalize_path, path::route::route_candidates, plural_s},
};
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// Run all checks and print a summary.
pub fn check_config(config: &SiteConfig, args: &CheckArgs) -> Result<()> {
    let mut diag = config.diagnostics();

    let report = match &args.content {
        Some(content) => {
            let content = normalize_path(content);
            if !content.is_dir() {
                bail!("content directory '{}' does not exist", content.display());
            }
            unresolved_routes(config, &content)
        }
        None => RouteReport::default(),
    };

    if args.warn_only {
        diag.downgrade_errors();
    }

    diag.print_warnings();
    report.print();

    let links = link_count(config);
    let groups = config.theme.sidebar.len();
    let (errors, warnings) = (diag.len(), diag.warnings().len());
    log!(
        "check";
        "{}: {} link{}, {} sidebar group{}, {} error{}, {} warning{}",
        config.source_label(),
        links,
        plural_s(links),
        groups,
        plural_s(groups),
        errors,
        plural_s(errors),
        warnings,
        plural_s(warnings)
    );
    if args.content.is_some() {
        log!("check"; "{}", report);
    }

    diag.into_result().map_err(ConfigError::Diagnostics)?;
    if !report.is_empty() && !args.warn_only {
        bail!(
            "{} route{} not found in content directory",
            report.error_count(),
            plural_s(report.error_count())
        );
    }
    Ok(())
}

/// Collect internal routes that no content file serves.
///
/// External links and malformed links are skipped; the latter are already
/// reported by validation.
pub fn unresolved_routes(config: &SiteConfig, content_dir: &Path) -> RouteReport {
    let mut report = RouteReport::default();

    let mut visit = |source: String, item: &NavItem| {
        if item.kind() == Some(LinkKind::Route) && resolve_route(content_dir, &item.link).is_none()
        {
            report.add(source, &item.link, &item.text);
        }
    };

    for item in &config.theme.nav {
        visit("nav".to_string(), item);
    }
    for group in &config.theme.sidebar {
        for item in &group.items {
            visit(format!("sidebar[{}]", group.text), item);
        }
    }

    report
}

/// Source file serving `route`, if any.
pub fn resolve_route(content_dir: &Path, route: &str) -> Option<PathBuf> {
    route_candidates(route)
        .into_iter()
        .map(|candidate| content_dir.join(candidate))
        .find(|path| path.is_file())
}

/// Total nav + sidebar + social links.
fn link_count(config: &SiteConfig) -> usize {
    let theme = &config.theme;
    theme.nav.len()
        + theme.sidebar.iter().map(|g| g.items.len()).sum::<usize>()
        + theme.social_links.len()
}

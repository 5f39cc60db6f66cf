//! Route report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::Style;

use crate::{logger::paint, utils::plural_s};

/// A configured route with no source file behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedRoute {
    /// The route as written in the config.
    pub route: String,
    /// Label the route is shown under.
    pub text: String,
}

/// Unresolved routes grouped by where they appear (`nav`, `sidebar[Articles]`).
#[derive(Debug, Default)]
pub struct RouteReport {
    pub routes: BTreeMap<String, Vec<UnresolvedRoute>>,
}

impl RouteReport {
    pub fn add(&mut self, source: impl Into<String>, route: &str, text: &str) {
        self.routes
            .entry(source.into())
            .or_default()
            .push(UnresolvedRoute {
                route: route.to_string(),
                text: text.to_string(),
            });
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Total unresolved route count.
    pub fn error_count(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    /// Print the grouped report to stderr.
    pub fn print(&self) {
        if self.routes.is_empty() {
            return;
        }
        eprintln!();

        let count = self.error_count();
        eprintln!(
            "{} {}",
            paint("routes", Style::new().red().bold()),
            paint(
                format_args!("({count} unresolved route{})", plural_s(count)),
                Style::new().dimmed()
            )
        );

        for (source, routes) in &self.routes {
            eprintln!(
                "{}{}{}",
                paint("[", Style::new().dimmed()),
                paint(source, Style::new().cyan()),
                paint("]", Style::new().dimmed())
            );
            for r in routes {
                eprintln!(
                    "{} {} {}",
                    paint("→", Style::new().red()),
                    r.route,
                    paint(format_args!("({})", r.text), Style::new().dimmed())
                );
            }
        }
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        if total == 0 {
            write!(f, "{}", paint("all routes resolved", Style::new().green()))
        } else {
            write!(
                f,
                "{} {} {}",
                paint("found", Style::new().dimmed()),
                paint(total, Style::new().red().bold()),
                paint(
                    format_args!("unresolved route{}", plural_s(total)),
                    Style::new().dimmed()
                )
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_and_count() {
        owo_colors::set_override(false);
        let mut report = RouteReport::default();
        assert_eq!(report.to_string(), "all routes resolved");

        report.add("nav", "/about", "About");
        report.add("sidebar[Articles]", "/a", "A");
        report.add("sidebar[Articles]", "/b", "B");

        assert_eq!(report.error_count(), 3);
        assert_eq!(report.routes["sidebar[Articles]"].len(), 2);
        assert_eq!(report.to_string(), "found 3 unresolved routes");
    }
}

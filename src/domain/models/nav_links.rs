//! Static link configuration for the nav
//!
//! Labels and internal paths are fixed; outbound URLs come from
//! [`NavConfig`].

use crate::config::NavConfig;

/// A single link rendered by the nav
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub new_tab: bool,
}

impl NavLink {
    fn internal(label: &'static str, href: &str) -> Self {
        Self {
            label,
            href: href.to_string(),
            new_tab: false,
        }
    }

    fn new_tab(label: &'static str, href: &str) -> Self {
        Self {
            label,
            href: href.to_string(),
            new_tab: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaVariant {
    /// Outlined button
    Default,
    /// Filled brand button
    Primary,
}

/// Call-to-action button on the right of the bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaLink {
    pub label: &'static str,
    pub href: String,
    pub variant: CtaVariant,
}

/// Entry in a mega-menu panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const PRODUCT_ENTRIES: &[PanelEntry] = &[
    PanelEntry {
        title: "Database",
        description: "Fully portable Postgres database",
        href: "/database",
    },
    PanelEntry {
        title: "Authentication",
        description: "User management out of the box",
        href: "/auth",
    },
    PanelEntry {
        title: "Storage",
        description: "Serverless storage for any media",
        href: "/storage",
    },
    PanelEntry {
        title: "Edge Functions",
        description: "Deploy code globally on the edge",
        href: "/edge-functions",
    },
    PanelEntry {
        title: "Realtime",
        description: "Synchronize and broadcast events",
        href: "/realtime",
    },
];

pub const DEVELOPERS_ENTRIES: &[PanelEntry] = &[
    PanelEntry {
        title: "Documentation",
        description: "Guides, references and quickstarts",
        href: "/docs",
    },
    PanelEntry {
        title: "Changelog",
        description: "New features and updates",
        href: "/changelog",
    },
    PanelEntry {
        title: "Blog",
        description: "Product news and engineering posts",
        href: "/blog",
    },
    PanelEntry {
        title: "Partners",
        description: "Integrations and experts",
        href: "/partners",
    },
];

/// Plain links shown in the desktop bar after the dropdowns
pub fn desktop_links() -> Vec<NavLink> {
    vec![
        NavLink::internal("Pricing", "/pricing"),
        NavLink::internal("Docs", "/docs"),
        NavLink::internal("Blog", "/blog"),
    ]
}

/// Links in the mobile flyout, top to bottom
pub fn mobile_links(config: &NavConfig) -> Vec<NavLink> {
    vec![
        NavLink::internal("Developers", "/docs"),
        NavLink::internal("Company", "/company"),
        NavLink::internal("Pricing", "/pricing"),
        NavLink::new_tab("Docs", "/docs"),
        NavLink::new_tab("GitHub", &config.github_url),
        NavLink::new_tab("Blog", "/blog"),
    ]
}

/// Sign-in link at the top of the mobile flyout
pub fn mobile_sign_in(config: &NavConfig) -> NavLink {
    NavLink::internal("Sign in", &config.dashboard_url)
}

/// Signed-in visitors get a single "Dashboard" button; everyone else gets
/// "Sign in" and "Start your project".
pub fn cta_links(is_logged_in: bool, config: &NavConfig) -> Vec<CtaLink> {
    if is_logged_in {
        vec![CtaLink {
            label: "Dashboard",
            href: config.signed_in_dashboard_path.clone(),
            variant: CtaVariant::Primary,
        }]
    } else {
        vec![
            CtaLink {
                label: "Sign in",
                href: config.dashboard_url.clone(),
                variant: CtaVariant::Default,
            },
            CtaLink {
                label: "Start your project",
                href: config.dashboard_url.clone(),
                variant: CtaVariant::Primary,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(links: &[CtaLink]) -> Vec<&'static str> {
        links.iter().map(|l| l.label).collect()
    }

    #[test]
    fn test_logged_in_cta_is_dashboard_only() {
        let config = NavConfig::default();
        let links = cta_links(true, &config);
        assert_eq!(labels(&links), vec!["Dashboard"]);
        assert_eq!(links[0].href, "/dashboard/projects");
    }

    #[test]
    fn test_logged_out_cta_is_sign_in_and_start() {
        let config = NavConfig::default();
        let links = cta_links(false, &config);
        assert_eq!(labels(&links), vec!["Sign in", "Start your project"]);
        assert_eq!(links[0].variant, CtaVariant::Default);
        assert_eq!(links[1].variant, CtaVariant::Primary);
    }

    #[test]
    fn test_cta_sets_are_disjoint() {
        let config = NavConfig::default();
        let logged_in = labels(&cta_links(true, &config));
        let logged_out = labels(&cta_links(false, &config));
        assert!(logged_in.iter().all(|l| !logged_out.contains(l)));
    }

    #[test]
    fn test_mobile_links_use_configured_github() {
        let config = NavConfig {
            github_url: "https://github.com/acme/site".to_string(),
            ..NavConfig::default()
        };
        let github = mobile_links(&config)
            .into_iter()
            .find(|l| l.label == "GitHub")
            .unwrap();
        assert_eq!(github.href, "https://github.com/acme/site");
        assert!(github.new_tab);
    }

    #[test]
    fn test_desktop_links_order() {
        let labels: Vec<_> = desktop_links().iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Pricing", "Docs", "Blog"]);
    }

    #[test]
    fn test_panel_entries_are_internal() {
        for entry in PRODUCT_ENTRIES.iter().chain(DEVELOPERS_ENTRIES) {
            assert!(entry.href.starts_with('/'), "{} is not internal", entry.title);
        }
    }
}
